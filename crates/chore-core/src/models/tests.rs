#[cfg(test)]
mod model_tests {
    use jiff::civil::{DateTime, date};

    use crate::{
        display::{Painted, TodoCard, Todos, format_record},
        error::TodoError,
        models::{Category, DisplayColor, Priority, Status, TodoList, TodoRecord},
        params::{CreateTodo, UpdateTodo},
    };

    fn now() -> DateTime {
        date(2026, 3, 14).at(12, 0, 0, 0)
    }

    fn create_params(title: &str, due: &str) -> CreateTodo {
        CreateTodo {
            title: title.to_string(),
            due: due.to_string(),
            category: Category::Blue,
            priority: Priority::Low,
            status: Status::Pending,
        }
    }

    fn create_test_todo() -> TodoRecord {
        TodoRecord::restore(
            "Buy milk",
            date(2030, 1, 1).at(9, 0, 0, 0),
            Category::Blue,
            Priority::Low,
            Status::Pending,
        )
        .unwrap()
    }

    #[test]
    fn test_create_valid_todo() {
        let todo = TodoRecord::create_at(&create_params("Buy milk", "2030-01-01T09:00"), now())
            .unwrap();
        assert_eq!(todo.title(), "Buy milk");
        assert_eq!(todo.due_at(), date(2030, 1, 1).at(9, 0, 0, 0));
        assert_eq!(todo.category(), Category::Blue);
        assert_eq!(todo.priority(), Priority::Low);
        assert_eq!(todo.status(), Status::Pending);
    }

    #[test]
    fn test_create_with_apostrophe_title_fails() {
        let err =
            TodoRecord::create_at(&create_params("'", "2030-01-01T09:00"), now()).unwrap_err();
        assert!(matches!(err, TodoError::InvalidField { ref field, .. } if field == "title"));
    }

    #[test]
    fn test_create_in_the_past_fails() {
        let err = TodoRecord::create_at(&create_params("Late", "2026-03-14T11:00"), now())
            .unwrap_err();
        assert!(matches!(err, TodoError::InvalidField { ref field, .. } if field == "due"));
    }

    #[test]
    fn test_create_with_garbage_date_fails() {
        let err =
            TodoRecord::create_at(&create_params("Soon", "next week"), now()).unwrap_err();
        assert!(matches!(err, TodoError::UnparsableDate { .. }));
    }

    #[test]
    fn test_create_uses_wall_clock() {
        assert!(TodoRecord::create(&create_params("Far off", "2999-01-01T00:00")).is_ok());
        assert!(TodoRecord::create(&create_params("Long gone", "2022-01-01T00:00")).is_err());
    }

    #[test]
    fn test_restore_ignores_due_floors() {
        let past = date(2019, 1, 1).at(0, 0, 0, 0);
        assert!(
            TodoRecord::restore("Old", past, Category::Red, Priority::High, Status::Completed)
                .is_ok()
        );
        assert!(
            TodoRecord::restore("", past, Category::Red, Priority::High, Status::Completed)
                .is_err()
        );
    }

    #[test]
    fn test_restore_rejects_fractional_seconds() {
        let due = date(2030, 1, 1).at(9, 0, 0, 500_000_000);
        let err = TodoRecord::restore("Nano", due, Category::Red, Priority::Low, Status::Pending)
            .unwrap_err();
        assert!(matches!(err, TodoError::InvalidField { ref field, .. } if field == "due"));
    }

    #[test]
    fn test_failed_setters_leave_record_unchanged() {
        let mut todo = create_test_todo();
        let before = todo.clone();

        assert!(todo.set_title("no, commas").is_err());
        assert!(todo.set_due("2021-05-06T09:00").is_err());
        assert!(todo.set_due("soon").is_err());
        assert_eq!(todo, before);
    }

    #[test]
    fn test_setters_apply_values() {
        let mut todo = create_test_todo();

        todo.set_title("Buy oat milk").unwrap();
        todo.set_due("2022-02-02T08:30").unwrap();
        todo.set_category(Category::Yellow);
        todo.set_priority(Priority::High);
        todo.set_status(Status::Partial);

        assert_eq!(todo.title(), "Buy oat milk");
        assert_eq!(todo.due_at(), date(2022, 2, 2).at(8, 30, 0, 0));
        assert_eq!(todo.category(), Category::Yellow);
        assert_eq!(todo.priority(), Priority::High);
        assert_eq!(todo.status(), Status::Partial);
    }

    #[test]
    fn test_apply_reports_changes() {
        let mut todo = create_test_todo();
        let changes = todo
            .apply(&UpdateTodo {
                title: Some("Buy bread".to_string()),
                status: Some(Status::Started),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(
            changes,
            vec![
                "Title: 'Buy milk' -> 'Buy bread'".to_string(),
                "Status: pending -> started".to_string(),
            ]
        );
        assert_eq!(todo.title(), "Buy bread");
        assert_eq!(todo.status(), Status::Started);
    }

    #[test]
    fn test_apply_is_all_or_nothing() {
        let mut todo = create_test_todo();
        let before = todo.clone();

        let err = todo
            .apply(&UpdateTodo {
                title: Some("Fine title".to_string()),
                due: Some("2020-01-01T00:00".to_string()),
                priority: Some(Priority::High),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, TodoError::InvalidField { ref field, .. } if field == "due"));
        assert_eq!(todo, before);
    }

    #[test]
    fn test_update_params_is_empty() {
        assert!(UpdateTodo::default().is_empty());
        assert!(
            !UpdateTodo {
                category: Some(Category::Red),
                ..Default::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn test_selection_mapping() {
        let categories: Vec<Category> = (1..=6).map(Category::from_selection).collect();
        assert_eq!(categories, Category::ALL);
        let priorities: Vec<Priority> = (1..=3).map(Priority::from_selection).collect();
        assert_eq!(priorities, Priority::ALL);
        let statuses: Vec<Status> = (1..=4).map(Status::from_selection).collect();
        assert_eq!(statuses, Status::ALL);
    }

    #[test]
    fn test_selection_falls_back_to_last() {
        assert_eq!(Category::from_selection(0), Category::Green);
        assert_eq!(Category::from_selection(42), Category::Green);
        assert_eq!(Priority::from_selection(9), Priority::High);
        assert_eq!(Status::from_selection(0), Status::Completed);
    }

    #[test]
    fn test_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        for priority in Priority::ALL {
            assert_eq!(priority.to_string().parse::<Priority>().unwrap(), priority);
        }
        for status in Status::ALL {
            assert_eq!(status.to_string().parse::<Status>().unwrap(), status);
        }
        assert_eq!("RED".parse::<Category>().unwrap(), Category::Red);
        assert!("orange".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_colors() {
        assert_eq!(Category::Purple.color(), DisplayColor::Magenta);
        assert_eq!(Category::Red.color().ansi_escape(), "\x1b[0;31m");
        assert_eq!(Category::Green.color().ansi_escape(), "\x1b[0;32m");
    }

    #[test]
    fn test_rank_order() {
        assert!(Priority::Low < Priority::Normal && Priority::Normal < Priority::High);
        assert!(Status::Pending < Status::Started);
        assert!(Status::Started < Status::Partial);
        assert!(Status::Partial < Status::Completed);
    }

    #[test]
    fn test_todo_display() {
        let output = create_test_todo().to_string();
        assert_eq!(
            output,
            "### Buy milk (blue)\n\n- Due: 2030-01-01T09:00\n- Importance: low\n- Status: pending\n\n"
        );
    }

    #[test]
    fn test_todo_card() {
        let todo = create_test_todo();
        let card = TodoCard(&todo);
        assert_eq!(card.color(), DisplayColor::Blue);
        assert_eq!(
            card.to_string(),
            "## Buy milk\n\n\
             - Category: blue\n\
             - Due on: Tuesday 1 of January 2030\n\
             - Due by: 09:00\n\
             - Importance: low\n\
             - Status: pending\n"
        );
        assert_eq!(format_record(&todo), card.to_string());
    }

    #[test]
    fn test_painted_wraps_in_color() {
        let todo = create_test_todo();
        let output = Painted(&todo).to_string();
        assert!(output.starts_with("\x1b[0;34m### Buy milk"));
        assert!(output.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_todos_listing() {
        let mut list = TodoList::new();
        assert_eq!(Todos(list.records()).to_string(), "No todos found.\n");

        list.push(create_test_todo());
        list.push(
            TodoRecord::restore(
                "Call Bob",
                date(2029, 6, 1).at(10, 0, 0, 0),
                Category::Red,
                Priority::High,
                Status::Started,
            )
            .unwrap(),
        );

        let output = Todos(list.records()).to_string();
        assert!(output.contains("### 1. Buy milk (blue)"));
        assert!(output.contains("### 2. Call Bob (red)"));
    }

    #[test]
    fn test_list_positions() {
        let mut list = TodoList::new();
        assert_eq!(list.push(create_test_todo()), 1);
        assert_eq!(list.push(create_test_todo()), 2);

        assert!(list.get(1).is_ok());
        assert!(matches!(
            list.get(0),
            Err(TodoError::PositionOutOfRange { position: 0, len: 2 })
        ));
        assert!(matches!(
            list.remove(3),
            Err(TodoError::PositionOutOfRange { position: 3, len: 2 })
        ));

        list.get_mut(2).unwrap().set_status(Status::Completed);
        let removed = list.remove(1).unwrap();
        assert_eq!(removed.status(), Status::Pending);
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(1).unwrap().status(), Status::Completed);
    }

    #[test]
    fn test_record_serializes_to_json() {
        let json = serde_json::to_value(create_test_todo()).unwrap();
        assert_eq!(json["title"], "Buy milk");
        assert_eq!(json["category"], "blue");
        assert_eq!(json["priority"], "low");
        assert_eq!(json["status"], "pending");
        assert!(json["due_at"].as_str().unwrap().starts_with("2030-01-01T09:00"));
    }
}
