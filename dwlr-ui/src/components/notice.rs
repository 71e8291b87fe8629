use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NoticeProps {
    pub message: String,
}

/// Amber informational strip (missing API key, map loading, etc.).
#[component]
pub fn Notice(props: NoticeProps) -> Element {
    rsx! {
        div {
            style: "margin: 8px 0; padding: 8px 12px; font-size: 14px; background: #FFFBEB; color: #78350F; border: 1px solid #FDE68A; border-radius: 6px;",
            "{props.message}"
        }
    }
}
