mod tests {
    use std::thread;

    use myrtio_ring_composer::{RenderRequest, StopSignal};

    #[test]
    fn test_stop_signal() {
        let stop = StopSignal::new();
        assert!(!stop.is_stopped());
        stop.stop();
        assert!(stop.is_stopped());
        stop.stop();
        assert!(stop.is_stopped());
        stop.reset();
        assert!(!stop.is_stopped());
    }

    #[test]
    fn test_render_request_coalesces() {
        let request = RenderRequest::default();
        assert!(!request.take());

        request.request();
        request.request();
        assert!(request.is_pending());
        assert!(request.take());
        assert!(!request.take());
        assert!(!request.is_pending());
    }

    #[test]
    fn test_signals_across_threads() {
        static STOP: StopSignal = StopSignal::new();
        static REQUEST: RenderRequest = RenderRequest::new();

        let workers: Vec<_> = (0..4)
            .map(|_| {
                thread::spawn(|| {
                    while !STOP.is_stopped() {
                        REQUEST.request();
                        thread::yield_now();
                    }
                })
            })
            .collect();

        while !REQUEST.take() {
            thread::yield_now();
        }
        STOP.stop();
        for worker in workers {
            worker.join().unwrap();
        }
        assert!(STOP.is_stopped());
    }
}
