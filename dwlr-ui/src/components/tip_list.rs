use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TipListProps {
    pub title: String,
    pub tips: Vec<String>,
}

/// Bordered card with a bulleted list of conservation tips.
#[component]
pub fn TipList(props: TipListProps) -> Element {
    rsx! {
        div {
            style: "border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px 24px; background: #fff;",
            h4 { style: "margin: 0 0 12px 0; font-size: 17px; font-weight: 500;", "{props.title}" }
            ul {
                style: "list-style: none; margin: 0; padding: 0; display: grid; gap: 10px;",
                for tip in props.tips.iter() {
                    li {
                        key: "{tip}",
                        style: "display: flex; gap: 8px; font-size: 14px;",
                        span { style: "color: #9ca3af;", "•" }
                        span { "{tip}" }
                    }
                }
            }
        }
    }
}
