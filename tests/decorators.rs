use std::{
	cell::{Cell, RefCell},
	panic::{catch_unwind, AssertUnwindSafe},
	rc::Rc,
	time::Duration,
};
use underbar::{delay, memoize, once, throttle, Clock, ManualClock, Scheduler, TimerQueue};

fn millis(ms: u64) -> Duration {
	Duration::from_millis(ms)
}

#[test]
fn once_invokes_only_the_first_time() {
	let mut calls = 0;
	let mut counted = once(|x: i32| {
		calls += 1;
		x * 10
	});

	assert!(!counted.is_called());
	assert_eq!(*counted.call(1), 10);
	assert_eq!(*counted.call(2), 10);
	assert_eq!(*counted.call(3), 10);
	assert!(counted.is_called());
	assert_eq!(counted.result(), Some(&10));
	drop(counted);
	assert_eq!(calls, 1);
}

#[test]
fn separate_once_instances_have_separate_state() {
	let add = |x: i32| x + 1;
	let mut a = once(add);
	let mut b = once(add);
	assert_eq!(*a.call(1), 2);
	assert_eq!(*b.call(5), 6);
}

#[test]
fn memoize_computes_each_argument_once() {
	let calls = RefCell::new(Vec::new());
	let mut doubled = memoize(|n: &u64| {
		calls.borrow_mut().push(*n);
		n * 2
	});

	assert_eq!(*doubled.call(5), 10);
	assert_eq!(*doubled.call(5), 10);
	assert_eq!(*doubled.call(5), 10);
	assert_eq!(*doubled.call(6), 12);
	assert!(doubled.contains(&5));
	assert!(!doubled.contains(&7));
	assert_eq!(doubled.len(), 2);
	drop(doubled);
	assert_eq!(calls.into_inner(), [5, 6]);
}

#[test]
fn memoize_keys_by_the_argument_itself() {
	let mut lengths = memoize(|s: &String| s.len());
	assert_eq!(*lengths.call("abc".to_owned()), 3);
	assert!(lengths.contains("abc"));
	assert!(!lengths.is_empty());
}

#[test]
fn delay_runs_once_the_wait_has_passed() {
	let clock = ManualClock::new();
	let timers = TimerQueue::new(clock.clone());
	let log = Rc::new(RefCell::new(Vec::new()));

	let log_ = Rc::clone(&log);
	delay(
		&timers,
		move |(a, b)| log_.borrow_mut().push(format!("{a}{b}")),
		millis(500),
		("a", "b"),
	);

	assert_eq!(timers.len(), 1);
	clock.advance(millis(499));
	assert_eq!(timers.run_due(), 0);
	assert!(log.borrow().is_empty());

	clock.advance(millis(1));
	assert_eq!(timers.run_due(), 1);
	assert_eq!(*log.borrow(), ["ab"]);
	assert!(timers.is_empty());
}

/// Records every invocation of a throttled function as `(time, argument)`.
fn recorder(
	clock: &ManualClock,
) -> (Rc<RefCell<Vec<(Duration, i32)>>>, impl FnMut(i32) -> i32) {
	let log = Rc::new(RefCell::new(Vec::new()));
	let log_ = Rc::clone(&log);
	let clock = clock.clone();
	(log, move |x| {
		log_.borrow_mut().push((clock.now(), x));
		x
	})
}

#[test]
fn throttle_collapses_a_burst_into_one_trailing_call() {
	let clock = ManualClock::new();
	let timers = TimerQueue::new(clock.clone());
	let (log, function) = recorder(&clock);
	let throttled = throttle(function, millis(100), clock.clone(), timers.clone());

	assert_eq!(throttled.call(1), 1);
	assert_eq!(throttled.call(2), 1);
	assert!(throttled.is_pending());
	assert_eq!(throttled.call(3), 1);
	assert_eq!(throttled.call(4), 1);

	assert_eq!(*log.borrow(), [(millis(0), 1)]);
	assert_eq!(timers.len(), 1);
	assert_eq!(timers.next_deadline(), Some(millis(100)));

	clock.advance(millis(100));
	assert_eq!(timers.run_due(), 1);
	assert_eq!(*log.borrow(), [(millis(0), 1), (millis(100), 4)]);
	assert!(!throttled.is_pending());
	assert_eq!(throttled.last(), Some(4));

	// Nothing else fires, however long we wait.
	clock.advance(millis(1_000));
	assert_eq!(timers.run_due(), 0);
	assert_eq!(log.borrow().len(), 2);
}

#[test]
fn throttle_defers_to_the_end_of_the_window() {
	let clock = ManualClock::new();
	let timers = TimerQueue::new(clock.clone());
	let (log, function) = recorder(&clock);
	let throttled = throttle(function, millis(100), clock.clone(), timers.clone());

	throttled.call(1);
	clock.advance(millis(30));
	assert_eq!(throttled.call(2), 1);
	assert_eq!(timers.next_deadline(), Some(millis(100)));

	clock.advance(millis(70));
	timers.run_due();
	assert_eq!(*log.borrow(), [(millis(0), 1), (millis(100), 2)]);
}

#[test]
fn the_trailing_call_opens_a_new_window() {
	let clock = ManualClock::new();
	let timers = TimerQueue::new(clock.clone());
	let (log, function) = recorder(&clock);
	let throttled = throttle(function, millis(100), clock.clone(), timers.clone());

	throttled.call(1);
	throttled.call(2);
	clock.advance(millis(100));
	timers.run_due();

	// 50ms into the window opened by the trailing call.
	clock.advance(millis(50));
	assert_eq!(throttled.call(3), 2);
	assert!(throttled.is_pending());
	assert_eq!(timers.next_deadline(), Some(millis(200)));

	clock.advance(millis(50));
	timers.run_due();
	assert_eq!(
		*log.borrow(),
		[(millis(0), 1), (millis(100), 2), (millis(200), 3)]
	);
}

#[test]
fn throttle_invokes_immediately_after_a_quiet_period() {
	let clock = ManualClock::new();
	let timers = TimerQueue::new(clock.clone());
	let (log, function) = recorder(&clock);
	let throttled = throttle(function, millis(100), clock.clone(), timers.clone());

	assert_eq!(throttled.last(), None);
	assert_eq!(throttled.call(1), 1);
	clock.advance(millis(101));
	assert_eq!(throttled.call(2), 2);
	assert!(!throttled.is_pending());
	assert!(timers.is_empty());
	assert_eq!(*log.borrow(), [(millis(0), 1), (millis(101), 2)]);
}

#[test]
fn a_pending_trailing_call_outlives_its_handle() {
	let clock = ManualClock::new();
	let timers = TimerQueue::new(clock.clone());
	let (log, function) = recorder(&clock);
	let throttled = throttle(function, millis(10), clock.clone(), timers.clone());

	throttled.call(1);
	throttled.call(2);
	drop(throttled);

	clock.advance(millis(10));
	assert_eq!(timers.run_due(), 1);
	assert_eq!(log.borrow().last(), Some(&(millis(10), 2)));
}

#[test]
fn a_panicking_trailing_call_still_clears_the_pending_flag() {
	let clock = ManualClock::new();
	let timers = TimerQueue::new(clock.clone());
	let throttled = throttle(
		|x: i32| {
			assert_ne!(x, 2, "refusing 2");
			x
		},
		millis(100),
		clock.clone(),
		timers.clone(),
	);

	throttled.call(1);
	clock.advance(millis(10));
	throttled.call(2);
	assert!(throttled.is_pending());

	clock.advance(millis(90));
	assert!(catch_unwind(AssertUnwindSafe(|| timers.run_due())).is_err());
	assert!(!throttled.is_pending());
	assert!(timers.is_empty());

	// The failed call never opened a window, so this is past the first one.
	clock.advance(millis(1));
	assert_eq!(throttled.call(3), 3);
	assert!(!throttled.is_pending());
}

#[test]
fn huge_waits_saturate_instead_of_overflowing() {
	let clock = ManualClock::new();
	let timers = TimerQueue::new(clock.clone());
	clock.advance(millis(1));

	delay(&timers, |()| (), Duration::MAX, ());
	assert_eq!(timers.next_deadline(), Some(Duration::MAX));

	let throttled = throttle(|x: i32| x, Duration::MAX, clock.clone(), timers.clone());
	clock.advance(millis(4));
	assert_eq!(throttled.call(1), 1);
	clock.advance(millis(1));
	assert_eq!(throttled.call(2), 1);
	assert!(throttled.is_pending());

	clock.advance(Duration::MAX);
	assert_eq!(clock.now(), Duration::MAX);
	assert_eq!(timers.len(), 2);
}

#[test]
fn clocks_and_schedulers_work_through_references_and_rcs() {
	let clock = ManualClock::new();
	let borrowing = TimerQueue::new(&clock);
	let scheduler: &dyn Scheduler = &borrowing;
	let hits = Rc::new(Cell::new(0));

	let hits_ = Rc::clone(&hits);
	delay(&scheduler, move |()| hits_.set(hits_.get() + 1), millis(5), ());
	clock.advance(millis(5));
	assert_eq!(borrowing.run_due(), 1);
	assert_eq!(hits.get(), 1);

	let timers = TimerQueue::new(clock.clone());
	let throttled = throttle(
		|x: i32| x,
		millis(50),
		Rc::new(clock.clone()),
		Rc::new(timers.clone()),
	);
	assert_eq!(throttled.wait(), millis(50));
	throttled.call(1);
	throttled.call(2);
	assert_eq!(timers.next_deadline(), Some(millis(55)));
}

#[cfg(feature = "std")]
#[test]
fn run_until_idle_sleeps_through_the_wall_clock() {
	use underbar::SystemClock;

	let clock = SystemClock::new();
	let timers = TimerQueue::new(clock);
	let hits = Rc::new(Cell::new(0));

	let hits_ = Rc::clone(&hits);
	delay(&timers, move |()| hits_.set(hits_.get() + 1), millis(20), ());
	timers.run_until_idle();

	assert_eq!(hits.get(), 1);
	assert!(timers.is_empty());
	assert!(clock.now() >= millis(20));
}
