use dioxus::prelude::*;

const SPIN_CSS: &str = "@keyframes dwlr-spin { to { transform: rotate(360deg); } }";

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Fetching water level data...".to_string())]
    pub label: String,
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        style { "{SPIN_CSS}" }
        div {
            style: "display: flex; flex-direction: column; gap: 12px; align-items: center; justify-content: center; padding: 40px 0; font-size: 14px; color: #6b7280;",
            div { style: "width: 28px; height: 28px; border: 3px solid #bfdbfe; border-top-color: #2563eb; border-radius: 9999px; animation: dwlr-spin 0.8s linear infinite;" }
            "{props.label}"
        }
    }
}
