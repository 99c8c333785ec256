use form_events::{FormEvent, FormEvents};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_reads() {
    let tasks: Vec<_> = (0..64)
        .map(|i| {
            tokio::spawn(async move {
                let event = FormEvent::ALL[i % FormEvent::ALL.len()];
                let parsed: FormEvent = event.as_str().parse().unwrap();
                assert_eq!(parsed, event);
                FormEvents::PRE_SUBMIT
            })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap(), "form.pre_submit");
    }
}

#[test]
fn test_reads_from_plain_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| FormEvent::iter().map(|e| e.as_str()).collect::<Vec<_>>()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().len(), 5);
    }
}
