use blendcast::Pair;
use blendcast::queue::pair_queue;
use std::time::Duration;
use tokio::time::timeout;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pops_in_push_order() {
        let (queue, mut drain) = pair_queue();
        for i in 0..100 {
            queue
                .push(Pair::new(format!("param{}", i), i as f64 / 100.0))
                .expect("push should succeed while the drain is alive");
        }
        for i in 0..100 {
            let pair = drain.pop().await.expect("queue should hold 100 pairs");
            assert_eq!(
                pair.name,
                format!("param{}", i),
                "Pairs should come out in strict push order"
            );
        }
    }

    #[tokio::test]
    async fn pop_suspends_until_a_push_arrives() {
        let (queue, mut drain) = pair_queue();

        let waited = timeout(Duration::from_millis(50), drain.pop()).await;
        assert!(waited.is_err(), "Pop should suspend while the queue is empty");

        queue
            .push(Pair::new("jawOpen", 0.75))
            .expect("push should succeed");
        let pair = timeout(Duration::from_secs(1), drain.pop())
            .await
            .expect("pop should wake once a pair is pushed")
            .expect("queue should still have a producer");
        assert_eq!(pair, Pair::new("jawOpen", 0.75));
    }

    #[tokio::test]
    async fn push_works_from_a_plain_thread() {
        let (queue, mut drain) = pair_queue();

        let producer = std::thread::spawn(move || {
            for i in 0..50 {
                queue
                    .push(Pair::new(format!("p{}", i), i as f64))
                    .expect("push from a foreign thread should succeed");
            }
        });

        for i in 0..50 {
            let pair = timeout(Duration::from_secs(5), drain.pop())
                .await
                .expect("pops should keep up with the producer thread")
                .expect("producer should still be alive or buffered");
            assert_eq!(pair.name, format!("p{}", i), "Cross-thread pushes should stay FIFO");
        }
        producer.join().expect("producer thread should finish cleanly");
    }

    #[tokio::test]
    async fn pop_returns_none_after_all_producers_drop() {
        let (queue, mut drain) = pair_queue();
        queue.push(Pair::new("last", 1.5)).expect("push should succeed");
        drop(queue);

        assert_eq!(
            drain.pop().await,
            Some(Pair::new("last", 1.5)),
            "Buffered pairs should still drain after the producer drops"
        );
        assert_eq!(
            drain.pop().await,
            None,
            "Pop should report closure once producers are gone and the buffer is empty"
        );
    }

    #[tokio::test]
    async fn push_fails_once_the_drain_is_gone() {
        let (queue, drain) = pair_queue();
        drop(drain);
        let result = queue.push(Pair::new("orphan", 0.0));
        assert!(result.is_err(), "Push should surface a dropped drain");
        assert!(
            result.unwrap_err().contains("drain side closed"),
            "Error message should name the closed drain"
        );
    }
}
