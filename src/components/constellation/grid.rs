use leptos::prelude::*;

use super::component::{CategoryFilter, StateSignal, reveal, reveal_on_mount};
use super::style::{grid_card_style, level_percent, with_alpha};
use super::types::MAX_LEVEL;

/// Static category-filterable grid used below the mobile breakpoint.
#[component]
pub fn MobileGrid(state: StateSignal) -> impl IntoView {
	let visible = Memo::new(move |_| state.with(|s| s.visible_ids()));
	let columns = Memo::new(move |_| state.with(|s| s.grid_columns()));
	let revealed = reveal_on_mount();

	view! {
		<div class="mobile-tech-grid">
			<div class="constellation-header" style=move || reveal(revealed, 0.0)>
				<h2>"Tech Arsenal"</h2>
				<p>"Modern technologies and tools I use to build scalable solutions"</p>
			</div>
			<div style=move || reveal(revealed, 0.2)>
				<CategoryFilter state=state show_counts=false />
			</div>
			<div
				class="tech-grid"
				style=move || format!("grid-template-columns: repeat({}, 1fr);", columns.get())
			>
				<For
					each=move || visible.get()
					key=|id: &String| id.clone()
					children=move |id: String| view! { <GridCard state=state id=id /> }
				/>
			</div>
		</div>
	}
}

#[component]
fn GridCard(state: StateSignal, id: String) -> impl IntoView {
	let entry = state.with_untracked(|s| s.node_by_id(&id).map(|(idx, n)| (idx, n.clone())));
	let revealed = reveal_on_mount();

	entry.map(move |(idx, node)| {
		let color = node.category.color();
		let delay = 0.4 + idx as f64 * 0.03;
		view! {
			<div
				class="tech-card"
				style=move || format!("{} {}", grid_card_style(color), reveal(revealed, delay))
			>
				<div
					class="tech-icon"
					style=format!(
						"background: linear-gradient(135deg, {}, {}); border: 1px solid {};",
						with_alpha(color, 0.125),
						with_alpha(color, 0.06),
						with_alpha(color, 0.25),
					)
				>
					{node.name.chars().next().map(String::from).unwrap_or_default()}
				</div>
				<h3 class="tech-name">{node.name.clone()}</h3>
				<div class="level-track">
					<div
						class="level-fill"
						style=format!(
							"width: {:.0}%; background: linear-gradient(90deg, {}, {}); box-shadow: 0 0 4px {};",
							level_percent(node.level),
							color,
							with_alpha(color, 0.5),
							with_alpha(color, 0.38),
						)
					></div>
				</div>
				<span class="tech-level">{format!("{}/{}", node.level, MAX_LEVEL)}</span>
			</div>
		}
	})
}
