use lockstep_core::{ClientFrame, SessionId};

use crate::integration::{WELCOME, create_test_room, init_tracing, join_sessions, joined};

#[tokio::test]
async fn test_late_joiner_gets_defaults() {
    init_tracing();

    let (room, output) = create_test_room();
    let sessions = join_sessions(&room, 2).await;
    room.snapshot().await.unwrap();

    assert_eq!(
        output.inbox(&sessions[1]).await,
        vec![
            WELCOME.to_owned(),
            "VIDEO_PAUSE".to_owned(),
            "VIDEO_SEEK:0".to_owned(),
            joined(2),
        ]
    );
}

#[tokio::test]
async fn test_late_joiner_gets_current_playback() {
    init_tracing();

    let (room, output) = create_test_room();
    let host = join_sessions(&room, 1).await[0];

    room.message(host, ClientFrame::decode("VIDEO_SEEK:12.5"))
        .await
        .unwrap();
    room.message(host, ClientFrame::decode("VIDEO_PLAY"))
        .await
        .unwrap();

    let late = SessionId::new();
    room.join(late).await.unwrap();
    room.snapshot().await.unwrap();

    let inbox = output.inbox(&late).await;
    assert_eq!(
        &inbox[..3],
        &[
            WELCOME.to_owned(),
            "VIDEO_PLAY".to_owned(),
            "VIDEO_SEEK:12.5".to_owned()
        ]
    );
    assert_eq!(inbox[3], joined(2));
}
