//! End-to-end journey tests: build a project with the builders, validate it,
//! serialize it through the wire format, and walk it with the navigation
//! engine.

use pretty_assertions::assert_eq;
use serde_json::json;
use waypost_builder::{fields, PageBuilders, PageOptions};
use waypost_logic::helpers;
use waypost_model::{
    migrate_project, validate_project, Condition, FieldOption, JourneySession, PageTypeRegistry,
    Project, ServiceSettings,
};
use waypost_nav::{
    find_page_by_path, get_next_page, get_referencing_pages, is_page_reachable, unreachable_pages,
};

/// A licence application: start, an eligibility question that branches, a
/// detail question on the eligible path, check answers, then either a
/// confirmation or an ineligible dead end.
fn licence_project() -> Project {
    let registry = PageTypeRegistry::new();
    let builders = PageBuilders::new(&registry);

    let ineligible = builders.content(
        PageOptions::new("You cannot apply")
            .with_content("Based on your answers you are not eligible for a licence."),
    );
    let confirmation = builders.confirmation(
        PageOptions::new("Application complete")
            .with_content("Your reference number is on its way."),
    );
    let check = builders.check_answers(
        PageOptions::new("Check your answers").with_next_page(&confirmation.id),
    );
    let name = builders.question(
        PageOptions::new("What is your name?")
            .with_field(fields::text_input("full-name", "Full name").with_required(true))
            .with_next_page(&check.id),
    );
    let eligibility = builders.question(
        PageOptions::new("Are you over 18?")
            .with_field(fields::radio_input(
                "over-18",
                "Are you over 18?",
                vec![
                    FieldOption::new("yes", "Yes"),
                    FieldOption::new("no", "No"),
                ],
            ))
            .with_condition(Condition::new(
                helpers::equals("over-18", json!("no")),
                &ineligible.id,
            ))
            .with_next_page(&name.id),
    );
    let start = builders.start(
        PageOptions::new("Apply for a licence")
            .with_content("Use this service to apply for a licence.")
            .with_next_page(&eligibility.id),
    );

    let mut project = Project::new(
        "Licence application",
        ServiceSettings::new("Apply for a licence"),
    );
    project.add_page(start);
    project.add_page(eligibility);
    project.add_page(name);
    project.add_page(check);
    project.add_page(confirmation);
    project.add_page(ineligible);
    project
}

#[test]
fn built_project_passes_validation() {
    let project = licence_project();
    let registry = PageTypeRegistry::new();
    let raw = serde_json::to_value(&project).unwrap();

    let validated = validate_project(&raw, &registry).unwrap();
    assert_eq!(validated, project);

    // and again, to the same result
    let revalidated = validate_project(&raw, &registry).unwrap();
    assert_eq!(revalidated, validated);
}

#[test]
fn built_project_round_trips_through_migration() {
    let project = licence_project();
    let raw = serde_json::to_value(&project).unwrap();
    let migrated = migrate_project(&raw, &PageTypeRegistry::new()).unwrap();
    assert_eq!(migrated, project);
}

#[test]
fn eligible_journey_walks_to_confirmation() {
    let project = licence_project();
    let mut session = JourneySession::new();
    session.set_answer("over-18", json!("yes"));
    session.set_answer("full-name", json!("Sam Smith"));

    let start = find_page_by_path(&project, "/apply-for-a-licence").unwrap();
    let eligibility = get_next_page(&project, start, &session).unwrap();
    assert_eq!(eligibility.key, "are-you-over-18");

    let name = get_next_page(&project, eligibility, &session).unwrap();
    assert_eq!(name.key, "what-is-your-name");

    let check = get_next_page(&project, name, &session).unwrap();
    assert_eq!(check.key, "check-your-answers");

    let confirmation = get_next_page(&project, check, &session).unwrap();
    assert_eq!(confirmation.key, "application-complete");
    assert!(get_next_page(&project, confirmation, &session).is_none());
}

#[test]
fn ineligible_answer_branches_to_dead_end() {
    let project = licence_project();
    let mut session = JourneySession::new();
    session.set_answer("over-18", json!("no"));

    let eligibility = find_page_by_path(&project, "/are-you-over-18").unwrap();
    let next = get_next_page(&project, eligibility, &session).unwrap();
    assert_eq!(next.key, "you-cannot-apply");
}

#[test]
fn unanswered_question_takes_the_default_edge() {
    let project = licence_project();
    let session = JourneySession::new();

    let eligibility = find_page_by_path(&project, "/are-you-over-18").unwrap();
    let next = get_next_page(&project, eligibility, &session).unwrap();
    assert_eq!(next.key, "what-is-your-name");
}

#[test]
fn every_page_is_reachable() {
    let project = licence_project();
    for page in &project.pages {
        assert!(
            is_page_reachable(&project, &page.id),
            "{} should be reachable",
            page.key
        );
    }
    assert!(unreachable_pages(&project).is_empty());
}

#[test]
fn removing_a_page_leaves_detectable_orphans() {
    let mut project = licence_project();
    let eligibility_id = find_page_by_path(&project, "/are-you-over-18")
        .unwrap()
        .id
        .clone();

    let referencing = get_referencing_pages(&project, &eligibility_id);
    assert_eq!(referencing.len(), 1);
    assert_eq!(referencing[0].key, "apply-for-a-licence");

    project.remove_page(&eligibility_id);

    // everything downstream of the removed page is now unreachable
    let orphans: Vec<&str> = unreachable_pages(&project)
        .iter()
        .map(|p| p.key.as_str())
        .collect();
    assert_eq!(
        orphans,
        vec![
            "what-is-your-name",
            "check-your-answers",
            "application-complete",
            "you-cannot-apply",
        ]
    );

    // and the validator reports the dangling reference
    let raw = serde_json::to_value(&project).unwrap();
    let issues = validate_project(&raw, &PageTypeRegistry::new()).unwrap_err();
    assert!(issues
        .iter()
        .any(|i| i.message.contains("references unknown page id")));
}
