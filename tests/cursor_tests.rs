use flik_studio::cursor::{CursorFollower, HoverRole, HoverTracker, Spring};

#[test]
fn hover_role_follows_pointer_across_frames() {
    let mut tracker = HoverTracker::default();

    // Frame 1: pointer over a text field
    tracker.begin_frame();
    tracker.observe(false, HoverRole::Button);
    tracker.observe(true, HoverRole::Text);
    assert_eq!(tracker.end_frame(), HoverRole::Text);

    // Frame 2: pointer over a button
    tracker.begin_frame();
    tracker.observe(true, HoverRole::Button);
    tracker.observe(false, HoverRole::Text);
    assert_eq!(tracker.end_frame(), HoverRole::Button);

    // Frame 3: pointer over empty space
    tracker.begin_frame();
    tracker.observe(false, HoverRole::Button);
    assert_eq!(tracker.end_frame(), HoverRole::Default);
}

#[test]
fn stiffer_spring_catches_up_faster() {
    let mut soft = CursorFollower::new(Spring {
        stiffness: 100.0,
        damping: 20.0,
    });
    let mut stiff = CursorFollower::default();

    for follower in [&mut soft, &mut stiff] {
        follower.step([0.0, 0.0], 0.0);
        for _ in 0..6 {
            follower.step([100.0, 0.0], 1.0 / 60.0);
        }
    }

    assert!(stiff.position()[0] > soft.position()[0]);
}

#[test]
fn follower_tracks_a_moving_pointer() {
    let mut follower = CursorFollower::default();
    let mut x = 0.0;
    for _ in 0..120 {
        x += 2.0;
        follower.step([x, 50.0], 1.0 / 60.0);
    }
    let [fx, fy] = follower.position();
    assert!(fx < x && x - fx < 20.0, "lag {}", x - fx);
    assert!((fy - 50.0).abs() < 1e-3);
    assert!(follower.velocity()[0] > 0.0);
}
