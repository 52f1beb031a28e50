use super::*;
use leptos::tachys::view::RenderHtml;

fn activity(max: u32, participants: &[&str]) -> Activity {
    Activity {
        max_participants: max,
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
        ..Activity::default()
    }
}

#[test]
fn availability_counts_remaining_spots() {
    assert_eq!(availability_text(&activity(10, &["a@x.com"])), "9 spots left");
}

#[test]
fn availability_with_no_participants_is_full_capacity() {
    assert_eq!(availability_text(&activity(12, &[])), "12 spots left");
}

#[test]
fn availability_follows_the_current_participant_list() {
    let mut a = activity(3, &["a@x.com"]);
    assert_eq!(availability_text(&a), "2 spots left");
    a.participants.push("b@x.com".to_owned());
    assert_eq!(availability_text(&a), "1 spots left");
}

// =============================================================
// Rendering
// =============================================================

fn render(name: &str, activity: Activity) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let on_remove = Callback::new(|_: (String, String)| {});
        view! { <ActivityCard name=name.to_owned() activity=activity on_remove=on_remove/> }.to_html()
    })
}

#[test]
fn card_escapes_markup_in_name_and_emails() {
    let html = render("<b>X</b>", activity(10, &["<i>a</i>@x.com"]));

    assert!(html.contains("<h4>&lt;b&gt;X&lt;/b&gt;</h4>"), "{html}");
    assert!(html.contains(r#"data-email="&lt;i&gt;a&lt;/i&gt;@x.com""#), "{html}");
    assert!(!html.contains("<b>X</b>"), "{html}");
    assert!(!html.contains("<i>a</i>"), "{html}");
}

#[test]
fn card_shows_spots_left_and_one_row_per_participant() {
    let html = render("Chess Club", activity(10, &["a@x.com"]));

    assert!(html.contains("9 spots left"), "{html}");
    assert_eq!(html.matches(r#"class="participant-item""#).count(), 1, "{html}");
    assert!(html.contains(r#"data-email="a@x.com""#), "{html}");
    assert!(html.contains(r#"title="Unregister""#), "{html}");
    assert!(!html.contains("No participants yet"), "{html}");
}

#[test]
fn card_without_participants_shows_placeholder_row() {
    let html = render("Art", activity(12, &[]));

    assert!(html.contains(r#"<li class="no-participants">No participants yet</li>"#), "{html}");
    assert!(html.contains("12 spots left"), "{html}");
    assert!(!html.contains("participant-item"), "{html}");
}
