use std::collections::{HashMap, HashSet};

use log::{debug, warn};

use super::types::{Category, CategoryInfo, Point, SkillNode};

/// Static skill catalog with an id index and a symmetric edge list.
#[derive(Clone, Debug, Default)]
pub struct Registry {
	nodes: Vec<SkillNode>,
	id_to_idx: HashMap<String, usize>,
	edges: Vec<(usize, usize)>,
}

impl Registry {
	pub fn new(data: Vec<SkillNode>) -> Self {
		let mut nodes = Vec::with_capacity(data.len());
		let mut id_to_idx = HashMap::new();

		for node in data {
			if id_to_idx.contains_key(&node.id) {
				warn!("duplicate skill id {:?}, keeping the first entry", node.id);
				continue;
			}
			id_to_idx.insert(node.id.clone(), nodes.len());
			nodes.push(node);
		}

		// A connection declared on either side yields one undirected edge.
		let mut seen = HashSet::new();
		let mut edges = Vec::new();
		for (src, node) in nodes.iter().enumerate() {
			for target in &node.connections {
				let Some(&tgt) = id_to_idx.get(target) else {
					debug!("skill {:?} links to unknown id {:?}", node.id, target);
					continue;
				};
				if tgt == src {
					continue;
				}
				let key = (src.min(tgt), src.max(tgt));
				if seen.insert(key) {
					edges.push(key);
				}
			}
		}

		Self {
			nodes,
			id_to_idx,
			edges,
		}
	}

	/// Catalog used by the interactive canvas.
	pub fn desktop() -> Self {
		Self::new(catalog())
	}

	/// Same catalog without connections, for the static mobile grid.
	pub fn grid() -> Self {
		Self::new(
			catalog()
				.into_iter()
				.map(|mut node| {
					node.connections.clear();
					node
				})
				.collect(),
		)
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn nodes(&self) -> &[SkillNode] {
		&self.nodes
	}

	pub fn node(&self, idx: usize) -> Option<&SkillNode> {
		self.nodes.get(idx)
	}

	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.id_to_idx.get(id).copied()
	}

	/// Undirected edges as `(low, high)` index pairs, each listed once.
	pub fn edges(&self) -> &[(usize, usize)] {
		&self.edges
	}

	pub fn categories(&self) -> Vec<CategoryInfo> {
		Category::ALL
			.iter()
			.map(|&category| CategoryInfo {
				category,
				name: category.name(),
				color: category.color(),
				count: self
					.nodes
					.iter()
					.filter(|n| n.category == category)
					.count(),
			})
			.collect()
	}
}

fn skill(id: &str, name: &str, level: u8, category: Category, x: f64, y: f64) -> SkillNode {
	SkillNode::new(id, name, category, level, Point::new(x, y))
}

/// Hand-tuned layout in the 1400x800 reference frame: frontend on the left,
/// backend center-right, databases top-right, tooling along the bottom.
fn catalog() -> Vec<SkillNode> {
	use Category::*;

	vec![
		skill("react", "React", 8, Frontend, 250.0, 300.0)
			.connected_to(&["javascript", "typescript", "nextjs", "redux", "zustand"]),
		skill("nextjs", "Next.js", 4, Frontend, 350.0, 200.0)
			.connected_to(&["react", "typescript", "vercel"]),
		skill("typescript", "TypeScript", 4, Frontend, 150.0, 400.0)
			.connected_to(&["javascript", "react", "nodejs", "zustand"]),
		skill("tailwind", "Tailwind CSS", 8, Frontend, 180.0, 200.0)
			.connected_to(&["css", "react"]),
		skill("javascript", "JavaScript", 8, Frontend, 280.0, 450.0)
			.connected_to(&["react", "nodejs", "typescript", "redux"]),
		skill("html", "HTML5", 9, Frontend, 120.0, 300.0).connected_to(&["css", "javascript"]),
		skill("css", "CSS3", 9, Frontend, 150.0, 500.0).connected_to(&["html", "tailwind"]),
		skill("redux", "Redux", 6, Frontend, 380.0, 350.0).connected_to(&["react", "javascript"]),
		skill("zustand", "Zustand", 7, Frontend, 320.0, 280.0)
			.connected_to(&["react", "typescript"]),
		skill("nodejs", "Node.js", 8, Backend, 700.0, 300.0)
			.connected_to(&["javascript", "express", "mongodb", "restapi"]),
		skill("express", "Express.js", 8, Backend, 850.0, 250.0)
			.connected_to(&["nodejs", "jwt", "mongodb", "restapi", "oauth"]),
		skill("python", "Python", 4, Backend, 600.0, 450.0).connected_to(&["fastapi"]),
		skill("fastapi", "FastAPI", 2, Backend, 650.0, 550.0)
			.connected_to(&["python", "restapi"]),
		skill("jwt", "JWT", 7, Backend, 780.0, 400.0).connected_to(&["express", "nodejs", "oauth"]),
		skill("oauth", "OAuth", 7, Backend, 750.0, 180.0)
			.connected_to(&["jwt", "express", "firebase"]),
		skill("restapi", "REST API", 8, Backend, 820.0, 350.0)
			.connected_to(&["nodejs", "express", "fastapi", "graphql"]),
		skill("graphql", "GraphQL", 5, Backend, 900.0, 400.0).connected_to(&["restapi", "nodejs"]),
		skill("mongodb", "MongoDB", 7, Database, 1000.0, 300.0)
			.connected_to(&["nodejs", "express"]),
		skill("postgresql", "PostgreSQL", 7, Database, 1100.0, 200.0).connected_to(&["supabase"]),
		skill("supabase", "Supabase", 6, Database, 1200.0, 150.0)
			.connected_to(&["postgresql", "firebase"]),
		skill("firebase", "Firebase", 6, Database, 950.0, 150.0)
			.connected_to(&["oauth", "supabase"]),
		skill("git", "Git", 7, Tools, 450.0, 600.0).connected_to(&["github", "vscode"]),
		skill("github", "GitHub", 7, Tools, 600.0, 650.0).connected_to(&["git", "vercel"]),
		skill("docker", "Docker", 5, Tools, 850.0, 550.0).connected_to(&["nodejs"]),
		skill("vscode", "VS Code", 8, Tools, 350.0, 650.0).connected_to(&["git"]),
		skill("vercel", "Vercel", 6, Tools, 750.0, 650.0).connected_to(&["github", "nextjs"]),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, links: &[&str]) -> SkillNode {
		SkillNode::new(id, id, Category::Tools, 5, Point::default()).connected_to(links)
	}

	#[test]
	fn desktop_catalog_has_unique_ids_and_no_dangling_edges() {
		let registry = Registry::desktop();
		assert_eq!(registry.len(), 26);
		for node in registry.nodes() {
			for target in &node.connections {
				assert!(registry.index_of(target).is_some(), "{} -> {}", node.id, target);
			}
		}
	}

	#[test]
	fn one_sided_declaration_yields_a_symmetric_edge() {
		let registry = Registry::new(vec![node("a", &["b"]), node("b", &[])]);
		assert_eq!(registry.edges(), &[(0, 1)]);
	}

	#[test]
	fn mutual_declaration_is_listed_once() {
		let registry = Registry::new(vec![node("a", &["b"]), node("b", &["a"])]);
		assert_eq!(registry.edges().len(), 1);
	}

	#[test]
	fn dangling_and_self_links_are_dropped() {
		let registry = Registry::new(vec![node("a", &["ghost", "a"]), node("b", &[])]);
		assert!(registry.edges().is_empty());
	}

	#[test]
	fn duplicate_ids_keep_first_entry() {
		let mut second = node("a", &[]);
		second.name = "second".into();
		let registry = Registry::new(vec![node("a", &[]), second]);
		assert_eq!(registry.len(), 1);
		assert_eq!(registry.node(0).map(|n| n.name.as_str()), Some("a"));
	}

	#[test]
	fn category_counts_cover_catalog() {
		let registry = Registry::desktop();
		let cats = registry.categories();
		let counts: Vec<usize> = cats.iter().map(|c| c.count).collect();
		assert_eq!(counts, vec![9, 8, 4, 5]);
		assert_eq!(cats[1].color, "#8B5CF6");
	}

	#[test]
	fn grid_catalog_has_no_edges() {
		let registry = Registry::grid();
		assert_eq!(registry.len(), 26);
		assert!(registry.edges().is_empty());
	}

	#[test]
	fn levels_are_clamped() {
		let low = SkillNode::new("x", "x", Category::Tools, 0, Point::default());
		let high = SkillNode::new("y", "y", Category::Tools, 42, Point::default());
		assert_eq!((low.level, high.level), (1, 10));
	}
}
