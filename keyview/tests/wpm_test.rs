mod common;
pub(crate) use crate::common::*;

mod wpm_test {
    use super::*;

    use keyview::WpmMonitor;
    use rusty_fork::rusty_fork_test;

    fn type_keys(monitor: &mut WpmMonitor, count: usize) {
        for _ in 0..count {
            monitor.record_keystroke();
        }
    }

    rusty_fork_test! {

    #[test]
    fn test_steady_typing_converges() {
        let mut monitor = WpmMonitor::new();

        // 5 releases per second = one word per second = 60 WPM.
        type_keys(&mut monitor, 5);
        advance_ms(1_000);
        assert_eq!(monitor.poll(), 60);

        type_keys(&mut monitor, 5);
        advance_ms(1_000);
        assert_eq!(monitor.poll(), 60);
    }

    #[test]
    fn test_average_smooths_bursts() {
        let mut monitor = WpmMonitor::new();

        type_keys(&mut monitor, 5);
        advance_ms(1_000);
        assert_eq!(monitor.poll(), 60);

        // A faster second gets averaged in rather than taking over.
        type_keys(&mut monitor, 10);
        advance_ms(1_000);
        assert_eq!(monitor.poll(), 90);
    }

    #[test]
    fn test_idle_second_resets_to_zero() {
        let mut monitor = WpmMonitor::new();

        type_keys(&mut monitor, 5);
        advance_ms(1_000);
        assert_eq!(monitor.poll(), 60);

        advance_ms(1_000);
        assert_eq!(monitor.poll(), 0);

        // The sample window also restarts from scratch.
        type_keys(&mut monitor, 2);
        advance_ms(1_000);
        assert_eq!(monitor.poll(), 24);
    }

    #[test]
    fn test_no_sample_before_the_interval() {
        let mut monitor = WpmMonitor::new();

        type_keys(&mut monitor, 5);
        advance_ms(500);
        assert_eq!(monitor.poll(), 0);

        advance_ms(500);
        assert_eq!(monitor.poll(), 60);
    }

    }
}
