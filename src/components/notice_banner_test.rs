use super::*;
use crate::board::BoardStore;
use crate::state::notice::NoticeKind;
use leptos::tachys::view::RenderHtml;

fn render(state: RwSignal<ActivitiesState>) -> String {
    view! { <NoticeBanner state=state/> }.to_html()
}

#[test]
fn empty_slot_renders_hidden() {
    let owner = Owner::new();
    owner.with(|| {
        let state = RwSignal::new(ActivitiesState::default());
        let html = render(state);
        assert!(html.contains(r#"class="hidden""#), "{html}");
    });
}

#[test]
fn visible_notice_renders_kind_class_and_escaped_text() {
    let owner = Owner::new();
    owner.with(|| {
        let state = RwSignal::new(ActivitiesState::default());
        state.apply(|s| {
            s.notice.show("<b>Not found</b>", NoticeKind::Error, 4000);
        });

        let html = render(state);
        assert!(html.contains(r#"class="error""#), "{html}");
        assert!(html.contains("&lt;b&gt;Not found&lt;/b&gt;"), "{html}");
    });
}
