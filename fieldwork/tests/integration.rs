//! Integration tests for fieldwork: full editor -> form -> results flows
//! over a file-backed store.

use fieldwork::flow::{App, AppContext, Role, View};
use fieldwork::{Answer, QuestionKind};
use fieldwork_store::JsonFileStore;

fn admin_app(dir: &std::path::Path) -> App {
    App::new(AppContext::new(Role::Admin), JsonFileStore::new(dir)).unwrap()
}

/// Build and save a yes/no poll; returns (survey id, question id, yes id, no id).
fn save_yes_no_poll(app: &mut App) -> (String, String, String, String) {
    app.create_survey().unwrap();
    let editor = app.editor_mut().unwrap();
    editor.set_title("Team lunch");
    editor.set_description("Weekly poll");
    let question_id = editor.add_question();
    editor.set_question_title(&question_id, "Coming along?");
    editor.set_question_kind(&question_id, QuestionKind::Single);
    let yes = editor.add_choice(&question_id, "Yes").unwrap();
    let no = editor.add_choice(&question_id, "No").unwrap();
    let survey_id = editor.draft().id.clone();
    app.save_editor().unwrap();
    (survey_id, question_id, yes, no)
}

fn submit_single(app: &mut App, survey_id: &str, question_id: &str, choice_id: &str) {
    app.answer_survey(survey_id).unwrap();
    app.collector_mut()
        .unwrap()
        .set_answer(question_id, Answer::Single(choice_id.to_string()))
        .unwrap();
    app.submit_form().unwrap();
}

#[test]
fn surveys_and_responses_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    let (survey_id, question_id, yes, _no) = {
        let mut app = admin_app(dir.path());
        let ids = save_yes_no_poll(&mut app);
        submit_single(&mut app, &ids.0, &ids.1, &ids.2);
        ids
    };

    // a second session over the same directory sees everything
    let mut reopened = admin_app(dir.path());
    let survey = reopened.surveys().get(&survey_id).unwrap();
    assert_eq!(survey.title, "Team lunch");
    assert_eq!(survey.question(&question_id).unwrap().choices.len(), 2);
    assert_eq!(reopened.responses().count_for_survey(&survey_id), 1);

    reopened.view_results(&survey_id).unwrap();
    let results = reopened.results().unwrap();
    let tally = &results.questions[0].tallies[0];
    assert_eq!(tally.choice_id, yes);
    assert_eq!(tally.count, 1);
    assert_eq!(tally.percent, 100);
}

#[test]
fn yes_yes_no_tallies_67_33() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = admin_app(dir.path());
    let (survey_id, question_id, yes, no) = save_yes_no_poll(&mut app);

    submit_single(&mut app, &survey_id, &question_id, &yes);
    submit_single(&mut app, &survey_id, &question_id, &yes);
    submit_single(&mut app, &survey_id, &question_id, &no);

    app.view_results(&survey_id).unwrap();
    let results = app.results().unwrap();
    let stats = &results.questions[0];
    assert_eq!(stats.tallies[0].count, 2);
    assert_eq!(stats.tallies[0].percent, 67);
    assert_eq!(stats.tallies[1].count, 1);
    assert_eq!(stats.tallies[1].percent, 33);
}

#[test]
fn corrupt_surveys_blob_degrades_to_an_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("surveys.json"), "{definitely not json").unwrap();

    let app = admin_app(dir.path());
    assert_eq!(app.view(), View::List);
    assert!(app.surveys().is_empty());
}

#[test]
fn deleting_a_survey_cascades_on_disk_too() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut app = admin_app(dir.path());
        let (survey_id, question_id, yes, _) = save_yes_no_poll(&mut app);
        submit_single(&mut app, &survey_id, &question_id, &yes);
        app.delete_survey(&survey_id, true).unwrap();
    }

    let reopened = admin_app(dir.path());
    assert!(reopened.surveys().is_empty());
    assert!(reopened.responses().is_empty());
}

#[test]
fn answering_is_not_admin_gated() {
    let dir = tempfile::tempdir().unwrap();
    let (survey_id, question_id, yes, _no) = {
        let mut app = admin_app(dir.path());
        save_yes_no_poll(&mut app)
    };

    let mut user_app = App::new(
        AppContext::new(Role::User),
        JsonFileStore::new(dir.path()),
    )
    .unwrap();
    submit_single(&mut user_app, &survey_id, &question_id, &yes);
    assert_eq!(user_app.responses().count_for_survey(&survey_id), 1);
}
