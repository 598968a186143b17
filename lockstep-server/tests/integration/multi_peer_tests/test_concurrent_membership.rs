use lockstep_core::SessionId;

use crate::integration::{HOST_NOTICE, create_test_room, init_tracing, join_sessions, joined};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_joins_elect_one_host() {
    init_tracing();

    let (room, output) = create_test_room();
    let sessions: Vec<SessionId> = (0..32).map(|_| SessionId::new()).collect();

    let tasks: Vec<_> = sessions
        .iter()
        .map(|&session| {
            let room = room.clone();
            tokio::spawn(async move { room.join(session).await })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }
    let snapshot = room.snapshot().await.unwrap();

    assert_eq!(snapshot.members, 32);
    let host = snapshot.host.expect("a host must exist");
    assert!(sessions.contains(&host));
    assert_eq!(output.count_everywhere(HOST_NOTICE).await, 1);
    assert_eq!(output.count(&host, HOST_NOTICE).await, 1);

    // every count from 1 to 32 was announced exactly once, to the members of that moment
    for total in 1..=32 {
        assert_eq!(output.count_everywhere(&joined(total)).await, total);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_leaves_drain_room() {
    init_tracing();

    let (room, _output) = create_test_room();
    let sessions = join_sessions(&room, 16).await;

    let tasks: Vec<_> = sessions
        .iter()
        .map(|&session| {
            let room = room.clone();
            tokio::spawn(async move {
                // leave twice to exercise idempotence under contention
                room.leave(session).await?;
                room.leave(session).await
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap().unwrap();
    }
    let snapshot = room.snapshot().await.unwrap();

    assert_eq!(snapshot.members, 0);
    assert_eq!(snapshot.host, None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_host_always_member_under_churn() {
    init_tracing();

    let (room, _output) = create_test_room();
    let stayers = join_sessions(&room, 4).await;

    let tasks: Vec<_> = (0..24)
        .map(|_| {
            let room = room.clone();
            tokio::spawn(async move {
                let session = SessionId::new();
                room.join(session).await?;
                let snapshot = room.snapshot().await?;
                room.leave(session).await?;
                Ok::<_, lockstep_server::RoomError>(snapshot)
            })
        })
        .collect();

    room.leave(stayers[0]).await.unwrap();

    for task in tasks {
        let snapshot = task.await.unwrap().unwrap();
        assert!(snapshot.host.is_some());
        assert!(snapshot.members >= 1);
    }

    let snapshot = room.snapshot().await.unwrap();
    assert_eq!(snapshot.members, 3);
    assert!(stayers[1..].contains(&snapshot.host.unwrap()));
}
