use dioxus::prelude::*;

#[component]
pub fn Schemes(category: Option<String>) -> Element {
    rsx! {
        ui::SchemeListPage { category }
    }
}

#[component]
pub fn SchemeDetail(id: i64) -> Element {
    rsx! {
        ui::SchemeDetailPage { id }
    }
}
