use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SectionCardProps {
    pub title: String,
    pub children: Element,
}

/// Rounded card with a small heading, used around each chart.
#[component]
pub fn SectionCard(props: SectionCardProps) -> Element {
    rsx! {
        div {
            style: "border: 1px solid #e5e7eb; border-radius: 16px; padding: 20px; background: #fff; box-shadow: 0 1px 2px rgba(0,0,0,0.05);",
            h3 {
                style: "margin: 0 0 12px 0; font-size: 14px; font-weight: 600; color: #374151;",
                "{props.title}"
            }
            {props.children}
        }
    }
}
