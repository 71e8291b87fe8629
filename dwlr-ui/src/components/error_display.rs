use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Shows a Retry button when set
    #[props(default)]
    pub on_retry: Option<EventHandler<()>>,
}

/// Red error strip, optionally with a retry action.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "display: flex; gap: 12px; align-items: center; justify-content: space-between; padding: 12px 16px; margin: 8px 0; background: #FEF2F2; color: #B91C1C; border: 1px solid #FCA5A5; border-radius: 6px; font-size: 14px;",
            span { "{props.message}" }
            if let Some(retry) = props.on_retry {
                button {
                    style: "flex-shrink: 0; padding: 4px 12px; border-radius: 6px; border: 1px solid #FCA5A5; background: #fff; color: #B91C1C; cursor: pointer;",
                    onclick: move |_| retry.call(()),
                    "Retry"
                }
            }
        }
    }
}
