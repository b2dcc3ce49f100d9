#[cfg(target_family = "wasm")]
mod app {
	use enumset::EnumSet;
	use yew::prelude::*;
	use yew_media_query::{components::mobile, use_media_query, Breakpoint, Breakpoints};

	#[derive(Clone, PartialEq, Properties)]
	struct RowProps {
		breakpoint: Breakpoint,
	}

	#[function_component]
	fn Row(RowProps { breakpoint }: &RowProps) -> Html {
		let above = use_media_query(Breakpoints::above(*breakpoint));
		let below = use_media_query(Breakpoints::below(*breakpoint));
		let display = |result: Result<bool, _>| match result {
			Ok(matches) => matches.to_string(),
			Err(err) => format!("{err}"),
		};
		html! {
			<tr>
				<td>{breakpoint.as_str()}</td>
				<td>{format!("{}px", breakpoint.width())}</td>
				<td>{display(above)}</td>
				<td>{display(below)}</td>
			</tr>
		}
	}

	#[function_component]
	fn LayoutKind() -> Html {
		let kind = mobile::use_layout_kind();
		html! { <p>{format!("Layout: {kind:?}")}</p> }
	}

	#[function_component]
	pub fn App() -> Html {
		let (width, height) = yew_hooks::use_window_size();
		html! {
			<mobile::Provider threshold={Breakpoint::Md}>
				<p>{format!("Viewport: {width}x{height}")}</p>
				<LayoutKind />
				<table>
					<tr><th>{"breakpoint"}</th><th>{"width"}</th><th>{"above"}</th><th>{"below"}</th></tr>
					{EnumSet::<Breakpoint>::all().into_iter().map(|breakpoint| html! {
						<Row {breakpoint} />
					}).collect::<Vec<_>>()}
				</table>
			</mobile::Provider>
		}
	}
}

#[cfg(target_family = "wasm")]
fn main() {
	let _ = yew_media_query::logging::wasm::init(log::Level::Debug);
	yew::Renderer::<app::App>::new().render();
}

#[cfg(not(target_family = "wasm"))]
fn main() -> anyhow::Result<()> {
	use enumset::EnumSet;
	use yew_media_query::{build, logging::console, Breakpoint, Breakpoints, QueryInput};

	// Arguments are JSON query inputs (`'{"above":"md"}'`), or literal media queries otherwise.
	let parse_input = |arg: &str| serde_json::from_str::<QueryInput>(arg).unwrap_or_else(|_| QueryInput::from(arg));

	console::init("media-query", console::LevelFilter::Info, &[])?;

	let args = std::env::args().skip(1).collect::<Vec<_>>();
	if !args.is_empty() {
		for arg in args {
			match build(parse_input(&arg)) {
				Ok(query) => println!("{query}"),
				Err(err) => log::error!("{arg}: {err}"),
			}
		}
		return Ok(());
	}

	for breakpoint in EnumSet::<Breakpoint>::all() {
		println!("{:<3} above: {}", breakpoint.as_str(), build(Breakpoints::above(breakpoint))?);
		println!("{:<3} below: {}", breakpoint.as_str(), build(Breakpoints::below(breakpoint))?);
	}
	Ok(())
}
