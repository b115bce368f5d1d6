use super::*;

#[test]
fn placeholder_distinguishes_loading_from_redirect() {
    assert_eq!(placeholder_text(&GuardDecision::Pending), "Checking your session...");
    assert_eq!(placeholder_text(&GuardDecision::Redirect("/login".to_owned())), "Redirecting...");
    assert_eq!(placeholder_text(&GuardDecision::Render), "");
}
