use singletouch::backends::virtual_input::VirtualInput;
use singletouch::{
    FrameScheduler, InputMode, ScreenPoint, TouchEvents, TouchMonitor, TouchPhase, TouchSample,
};

fn print_listeners(events: &TouchEvents, label: &'static str) {
    events.add_started_listener(move |p| println!("({label}) started at {p}"));
    events.add_moved_listener(move |p| println!("({label}) moved to {p}"));
    events.add_ended_listener(move |p| println!("({label}) ended at {p}"));
}

fn main() {
    // Pointer: press, drag, release.
    let mut mouse = TouchMonitor::new(VirtualInput::new(InputMode::Pointer));
    print_listeners(&mouse.events(), "mouse");

    mouse.input_mut().move_pointer(ScreenPoint::new(40.0, 40.0));
    mouse.input_mut().press(0);
    mouse.update().expect("frame 1");
    mouse.input_mut().next_frame();

    mouse.input_mut().move_pointer(ScreenPoint::new(64.0, 52.0));
    mouse.update().expect("frame 2");
    mouse.input_mut().next_frame();

    mouse.input_mut().release(0);
    mouse.update().expect("frame 3");
    mouse.input_mut().next_frame();

    // Touch: the same gesture on slot 0.
    let mut finger = TouchMonitor::new(VirtualInput::new(InputMode::Touch));
    print_listeners(&finger.events(), "touch");

    let frames = [
        (TouchPhase::Began, ScreenPoint::new(10.0, 90.0)),
        (TouchPhase::Moved, ScreenPoint::new(30.0, 80.0)),
        (TouchPhase::Ended, ScreenPoint::new(45.0, 72.0)),
    ];
    for (phase, at) in frames {
        finger.input_mut().set_touch(0, TouchSample::new(phase, at));
        if let Err(e) = finger.update() {
            eprintln!("frame failed: {e}");
        }
        finger.input_mut().next_frame();
    }

    // Hand the idle mouse monitor to a scheduler; detaching tears it down.
    let mut sched = FrameScheduler::new();
    let id = sched.attach(mouse);
    for failure in sched.tick() {
        eprintln!("frame failed: {}", failure.error);
    }
    sched.detach(id);
}
