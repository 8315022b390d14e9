//! Segmented tab bar

use dioxus::prelude::*;

/// Properties for the Tabs component
#[derive(Clone, PartialEq, Props)]
pub struct TabsProps {
    /// Tab captions in display order
    pub labels: Vec<String>,
    /// Index of the highlighted tab
    pub active: usize,
    /// Called with the index of the clicked tab
    pub onselect: EventHandler<usize>,
}

/// CSS class for a tab at `index`
pub fn tab_class(index: usize, active: usize) -> &'static str {
    if index == active {
        "tab tab-active"
    } else {
        "tab"
    }
}

/// Row of mutually exclusive tabs.
///
/// Clicking the active tab still calls `onselect`.
#[component]
pub fn Tabs(props: TabsProps) -> Element {
    let onselect = props.onselect;

    rsx! {
        div { class: "tabs", role: "tablist",
            for (index, label) in props.labels.iter().enumerate() {
                button {
                    key: "{index}",
                    class: tab_class(index, props.active),
                    r#type: "button",
                    role: "tab",
                    "aria-selected": index == props.active,
                    onclick: move |_| onselect.call(index),
                    "{label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_tab_is_highlighted() {
        assert_eq!(tab_class(0, 0), "tab tab-active");
        assert_eq!(tab_class(1, 0), "tab");
    }
}
