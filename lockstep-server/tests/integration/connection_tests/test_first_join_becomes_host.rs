use lockstep_core::SessionId;

use crate::integration::{HOST_NOTICE, create_test_room, init_tracing, joined};

#[tokio::test]
async fn test_first_join_becomes_host() {
    init_tracing();

    let (room, output) = create_test_room();
    let session = SessionId::new();

    room.join(session).await.expect("room closed");
    let snapshot = room.snapshot().await.expect("room closed");

    assert_eq!(snapshot.host, Some(session));
    assert_eq!(snapshot.members, 1);
    assert_eq!(
        output.inbox(&session).await,
        vec![HOST_NOTICE.to_owned(), joined(1)]
    );
}

#[tokio::test]
async fn test_room_empties_then_next_joiner_is_host() {
    init_tracing();

    let (room, output) = create_test_room();
    let first = SessionId::new();
    let second = SessionId::new();

    room.join(first).await.unwrap();
    room.leave(first).await.unwrap();
    room.join(second).await.unwrap();
    let snapshot = room.snapshot().await.unwrap();

    assert_eq!(snapshot.host, Some(second));
    assert_eq!(output.inbox(&second).await[0], HOST_NOTICE);
}
