#[cfg(test)]
mod tests {
    use crate::errors::ValidationError;
    use crate::goals::{FormMode, FormTarget, Goal, GoalForm, GoalFormFields, GoalStatus};
    use crate::Error;
    use chrono::{NaiveDate, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_goal() -> Goal {
        Goal {
            id: "g-42".to_string(),
            title: "Migrate CI".to_string(),
            description: None,
            due_date: date(2024, 3, 1),
            status: GoalStatus::InProgress,
        }
    }

    #[test]
    fn test_new_form_is_closed() {
        let form = GoalForm::new();
        assert!(!form.is_open());
        assert_eq!(form.mode(), None);
        assert_eq!(form.fields(), None);
    }

    #[test]
    fn test_open_add_uses_defaults() {
        let mut form = GoalForm::new();
        form.open_add();

        let fields = form.fields().unwrap();
        assert_eq!(form.mode(), Some(FormMode::Add));
        assert_eq!(fields.title, "");
        assert_eq!(fields.description, "");
        assert_eq!(fields.due_date, Some(Utc::now().date_naive()));
        assert_eq!(fields.status, GoalStatus::NotStarted);
    }

    #[test]
    fn test_open_add_after_edit_session_resets_fields() {
        let today = date(2024, 5, 5);
        let mut form = GoalForm::new();
        form.open_edit_on(create_test_goal(), today);
        form.set_title("half-typed").unwrap();

        form.open_add_on(today);

        assert_eq!(form.target(), Some(&FormTarget::Add));
        assert_eq!(form.fields(), Some(&GoalFormFields::defaults(today)));
    }

    #[test]
    fn test_open_edit_prefills_from_goal() {
        let goal = create_test_goal();
        let mut form = GoalForm::new();
        form.open_edit_on(goal.clone(), date(2024, 5, 5));

        let fields = form.fields().unwrap();
        assert_eq!(form.mode(), Some(FormMode::Edit));
        assert_eq!(fields.title, goal.title);
        // Missing description falls back to the add-mode default.
        assert_eq!(fields.description, "");
        assert_eq!(fields.due_date, Some(goal.due_date));
        assert_eq!(fields.status, GoalStatus::InProgress);
    }

    #[test]
    fn test_edits_rejected_when_closed() {
        let mut form = GoalForm::new();
        assert!(matches!(form.set_title("x"), Err(Error::InvalidState(_))));
        assert!(matches!(
            form.set_status(GoalStatus::Completed),
            Err(Error::InvalidState(_))
        ));
        assert!(matches!(form.submit(), Err(Error::InvalidState(_))));
    }

    #[test]
    fn test_set_due_date_parses_iso_date() {
        let mut form = GoalForm::new();
        form.open_add_on(date(2024, 1, 1));

        form.set_due_date("2024-12-24").unwrap();
        assert_eq!(form.fields().unwrap().due_date, Some(date(2024, 12, 24)));

        form.set_due_date("  ").unwrap();
        assert_eq!(form.fields().unwrap().due_date, None);

        assert!(matches!(
            form.set_due_date("24/12/2024"),
            Err(Error::Validation(ValidationError::DateParse(_)))
        ));
    }

    #[test]
    fn test_submit_with_empty_title_stays_open() {
        let mut form = GoalForm::new();
        form.open_add_on(date(2024, 1, 1));

        let result = form.submit();
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::MissingField(ref f))) if f == "title"
        ));
        assert!(form.is_open());
    }

    #[test]
    fn test_submit_without_due_date_stays_open() {
        let mut form = GoalForm::new();
        form.open_add_on(date(2024, 1, 1));
        form.set_title("Plan offsite").unwrap();
        form.set_due_date("").unwrap();

        let result = form.submit();
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::MissingField(ref f))) if f == "dueDate"
        ));
        assert!(form.is_open());
    }

    #[test]
    fn test_submit_packages_draft_and_closes() {
        let mut form = GoalForm::new();
        form.open_add_on(date(2024, 1, 1));
        form.set_title("Plan offsite").unwrap();
        form.set_description("Two days, somewhere quiet").unwrap();
        form.set_status(GoalStatus::InProgress).unwrap();

        let submission = form.submit().unwrap();
        assert!(!form.is_open());
        assert_eq!(submission.mode(), FormMode::Add);
        assert_eq!(submission.draft.title, "Plan offsite");
        assert_eq!(
            submission.draft.description.as_deref(),
            Some("Two days, somewhere quiet")
        );
        assert_eq!(submission.draft.due_date, date(2024, 1, 1));
        assert_eq!(submission.draft.status, GoalStatus::InProgress);
    }

    #[test]
    fn test_edit_submission_carries_full_payload_and_target() {
        let goal = create_test_goal();
        let mut form = GoalForm::new();
        form.open_edit_on(goal.clone(), date(2024, 5, 5));
        form.set_status(GoalStatus::Completed).unwrap();

        let submission = form.submit().unwrap();
        assert_eq!(submission.target, FormTarget::Edit(goal.clone()));
        assert_eq!(submission.draft.title, goal.title);
        assert_eq!(submission.draft.description, None);
        assert_eq!(submission.draft.due_date, goal.due_date);
        assert_eq!(submission.draft.status, GoalStatus::Completed);
    }

    #[test]
    fn test_close_discards_session() {
        let mut form = GoalForm::new();
        form.open_edit_on(create_test_goal(), date(2024, 5, 5));
        form.close();
        assert_eq!(form, GoalForm::Closed);
    }
}
