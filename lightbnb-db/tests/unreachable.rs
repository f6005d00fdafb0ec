//! An unreachable database must surface as an error from every operation,
//! never as a panic or a silently empty result.

use lightbnb_db::{
    Cents, DbConfig, ErrorKind, Limit, NewProperty, NewUser, PropertyFilter, QueryGateway,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("lightbnb_db=debug")
        .with_test_writer()
        .try_init();
}

fn unreachable_config() -> DbConfig {
    DbConfig {
        host: "127.0.0.1".into(),
        // Nothing listens on tcpmux
        port: 1,
        acquire_timeout_secs: 1,
        max_connections: 1,
        ..DbConfig::default()
    }
}

#[tokio::test]
async fn eager_connect_reports_unavailable() {
    let err = QueryGateway::connect(&unreachable_config())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unavailable);
}

#[tokio::test]
async fn every_operation_reports_unavailable() {
    init_logging();
    let gateway = QueryGateway::connect_lazy(&unreachable_config()).expect("lazy gateway");

    let err = gateway.get_user_by_email("sue@example.com").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unavailable);

    let err = gateway.get_user_by_id(1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unavailable);

    let err = gateway
        .add_user(NewUser::new("Sue", "sue@example.com", "pw"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unavailable);

    let err = gateway
        .get_reservations_for_guest(1, Limit::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unavailable);

    let err = gateway
        .list_properties(&PropertyFilter::new().city("Van"), Limit::new(5))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unavailable);

    let property = NewProperty {
        owner_id: 1,
        title: "Loft".into(),
        description: String::new(),
        thumbnail_photo_url: String::new(),
        cover_photo_url: String::new(),
        cost_per_night: Cents(12_500),
        street: String::new(),
        city: "Vancouver".into(),
        province: String::new(),
        post_code: String::new(),
        country: "Canada".into(),
        parking_spaces: 0,
        number_of_bathrooms: 1,
        number_of_bedrooms: 1,
    };
    let err = gateway.add_property(property).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unavailable);

    gateway.close().await;
}

#[tokio::test]
async fn invalid_input_fails_without_touching_the_pool() {
    let gateway = QueryGateway::connect_lazy(&unreachable_config()).expect("lazy gateway");

    let err = gateway
        .add_user(NewUser::new("Sue", "not-an-email", "pw"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = gateway
        .list_properties(&PropertyFilter::new().min_rating(9.0), Limit::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    assert_eq!(gateway.pool().size(), 0);
}
