use custodesk::directory::errors::DirectoryError;
use custodesk::query::{CustomerListQuery, FilterField, SortDirection, SortField};
use custodesk::services::Flash;
use custodesk::services::list::{DeletePrompt, ListController, ListState, NO_CUSTOMERS_FOUND};

mod common;

use common::{StubDirectory, customer, listing};

#[tokio::test]
async fn test_initial_fetch_uses_the_default_query() {
    let directory = StubDirectory::new();
    directory.push_list(listing(
        7,
        2,
        vec![
            customer(1, "Asha", "Rao"),
            customer(2, "Vik", "Iyer"),
            customer(3, "Meera", "Shah"),
            customer(4, "Ravi", "Nair"),
            customer(5, "Dev", "Kulkarni"),
        ],
    ));

    let mut controller = ListController::new();
    controller.refresh(&directory).await;

    let queries = directory.list_queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0], CustomerListQuery::default());

    match controller.state() {
        ListState::Success(page) => {
            assert_eq!(page.items.len(), 5);
            assert_eq!(page.page_label(), "Page 1 of 2");
            assert!(!page.has_prev());
            assert!(page.has_next());
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_directory_is_a_success_not_an_error() {
    let directory = StubDirectory::new();

    let mut controller = ListController::new();
    controller.refresh(&directory).await;

    match controller.state() {
        ListState::Success(page) => {
            assert!(page.is_empty());
            assert_eq!(page.page_label(), "Page 1 of 0");
            assert!(!page.has_prev());
            assert!(!page.has_next());
        }
        other => panic!("expected success, got {other:?}"),
    }
    // copy shown over the empty page
    assert_eq!(NO_CUSTOMERS_FOUND, "No customers found.");
}

#[tokio::test]
async fn test_fetch_failure_shows_the_fixed_message() {
    let directory = StubDirectory::new();
    directory.push_list(Err(DirectoryError::Network("timed out".to_string())));

    let mut controller = ListController::new();
    controller.refresh(&directory).await;

    assert_eq!(
        controller.state(),
        &ListState::Error("Failed to fetch customers.".to_string())
    );
}

#[tokio::test]
async fn test_filter_edits_reach_the_directory_with_page_one() {
    let directory = StubDirectory::new();

    let mut controller = ListController::new();
    controller.refresh(&directory).await;

    controller.set_page(3);
    controller.set_filter(FilterField::City, "Pune");
    controller.set_sort(SortField::LastName, SortDirection::Ascending);
    controller.refresh(&directory).await;

    let queries = directory.list_queries.lock().unwrap();
    let last = queries.last().unwrap();
    assert_eq!(last.city, "Pune");
    assert_eq!(last.sort_by, SortField::LastName);
    assert_eq!(last.sort_dir, SortDirection::Ascending);
    assert_eq!(last.page, 1);
}

#[tokio::test]
async fn test_paging_round_trip_restores_the_original_query() {
    let directory = StubDirectory::new();
    directory.push_list(listing(8, 2, vec![customer(1, "Asha", "Rao")]));
    directory.push_list(listing(8, 2, vec![customer(6, "Dev", "Kulkarni")]));
    directory.push_list(listing(8, 2, vec![customer(1, "Asha", "Rao")]));

    let mut controller = ListController::new();
    controller.refresh(&directory).await;

    controller.next_page();
    controller.refresh(&directory).await;

    controller.prev_page();
    controller.refresh(&directory).await;

    let queries = directory.list_queries.lock().unwrap();
    assert_eq!(queries.len(), 3);
    assert_eq!(queries[0].page, 1);
    assert_eq!(queries[1].page, 2);
    assert_eq!(queries[2].page, 1);
    assert_eq!(queries[2], queries[0]);
}

#[tokio::test]
async fn test_confirmed_delete_removes_and_refetches() {
    let directory = StubDirectory::new();
    directory.push_list(listing(6, 2, vec![customer(5, "Asha", "Rao")]));
    directory.push_list(listing(5, 1, vec![customer(2, "Vik", "Iyer")]));

    let mut controller = ListController::new();
    controller.refresh(&directory).await;

    controller.request_delete(5);
    assert_eq!(
        controller.prompt(),
        DeletePrompt {
            show: true,
            customer_id: Some(5),
        }
    );

    controller.confirm_delete(&directory).await;

    assert_eq!(*directory.removed_ids.lock().unwrap(), vec![5]);
    assert_eq!(directory.list_calls(), 2);
    assert_eq!(controller.prompt(), DeletePrompt::default());
    assert_eq!(
        controller.take_flash(),
        Some(Flash::Success("Customer deleted successfully.".to_string()))
    );
    // the flash is one-shot
    assert_eq!(controller.take_flash(), None);

    match controller.state() {
        ListState::Success(page) => assert_eq!(page.items[0].id, 2),
        other => panic!("expected success, got {other:?}"),
    }
}

#[tokio::test]
async fn test_cancelled_delete_never_reaches_the_directory() {
    let directory = StubDirectory::new();

    let mut controller = ListController::new();
    controller.refresh(&directory).await;

    controller.request_delete(5);
    controller.cancel_delete();
    controller.confirm_delete(&directory).await;

    assert!(directory.removed_ids.lock().unwrap().is_empty());
    assert_eq!(controller.prompt(), DeletePrompt::default());
    assert_eq!(controller.take_flash(), None);
}

#[tokio::test]
async fn test_failed_delete_keeps_the_list_and_shows_the_server_message() {
    let directory = StubDirectory::new();
    directory.push_list(listing(1, 1, vec![customer(5, "Asha", "Rao")]));
    directory.push_remove(Err(DirectoryError::Api {
        status: 409,
        message: Some("Customer has open orders.".to_string()),
    }));

    let mut controller = ListController::new();
    controller.refresh(&directory).await;

    controller.request_delete(5);
    controller.confirm_delete(&directory).await;

    // no refetch happened, the prompt is closed, the error is flashed
    assert_eq!(directory.list_calls(), 1);
    assert_eq!(controller.prompt(), DeletePrompt::default());
    assert_eq!(
        controller.take_flash(),
        Some(Flash::Error("Customer has open orders.".to_string()))
    );

    match controller.state() {
        ListState::Success(page) => assert_eq!(page.items.len(), 1),
        other => panic!("expected success, got {other:?}"),
    }
}

#[tokio::test]
async fn test_failed_delete_without_server_message_uses_the_fallback() {
    let directory = StubDirectory::new();
    directory.push_remove(Err(DirectoryError::Api {
        status: 500,
        message: None,
    }));

    let mut controller = ListController::new();
    controller.refresh(&directory).await;

    controller.request_delete(9);
    controller.confirm_delete(&directory).await;

    assert_eq!(
        controller.take_flash(),
        Some(Flash::Error("Failed to delete customer.".to_string()))
    );
}

#[tokio::test]
async fn test_clearing_filters_refetches_everything() {
    let directory = StubDirectory::new();

    let mut controller = ListController::new();
    controller.set_filter(FilterField::Search, "rao");
    controller.refresh(&directory).await;

    controller.clear_filters();
    controller.refresh(&directory).await;

    let queries = directory.list_queries.lock().unwrap();
    assert_eq!(queries[0].search, "rao");
    assert_eq!(queries[1], CustomerListQuery::default());
}
