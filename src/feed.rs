use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Box<dyn FnMut(&Rc<T>)>;

/// Single-threaded publish/subscribe for immutable snapshots. Each publish
/// hands every subscriber the same `Rc`; earlier snapshots are never touched.
pub struct Feed<T> {
    latest: Option<Rc<T>>,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_id: u64,
    published: u64,
}

impl<T> Default for Feed<T> {
    fn default() -> Self {
        Self {
            latest: None,
            subscribers: Vec::new(),
            next_id: 0,
            published: 0,
        }
    }
}

impl<T> Feed<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber. It is called immediately with the latest
    /// snapshot if there is one.
    pub fn subscribe(&mut self, mut subscriber: impl FnMut(&Rc<T>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        if let Some(latest) = &self.latest {
            subscriber(latest);
        }
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn publish(&mut self, value: T) -> Rc<T> {
        let snapshot = Rc::new(value);
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&snapshot);
        }
        self.latest = Some(snapshot.clone());
        self.published += 1;
        snapshot
    }

    pub fn latest(&self) -> Option<Rc<T>> {
        self.latest.clone()
    }

    /// Number of snapshots published since creation.
    pub fn published(&self) -> u64 {
        self.published
    }

    pub fn clear(&mut self) {
        self.latest = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_subscribers_see_every_snapshot() {
        let mut feed = Feed::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        feed.subscribe(move |v: &Rc<u32>| sink.borrow_mut().push(**v));

        feed.publish(1);
        feed.publish(2);
        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(feed.published(), 2);
    }

    #[test]
    fn test_late_subscriber_gets_latest() {
        let mut feed = Feed::new();
        feed.publish("a".to_string());
        let seen = Rc::new(RefCell::new(None));
        let sink = seen.clone();
        feed.subscribe(move |v: &Rc<String>| *sink.borrow_mut() = Some(v.clone()));
        assert_eq!(seen.borrow().as_deref().map(String::as_str), Some("a"));
    }

    #[test]
    fn test_old_snapshot_unchanged_after_publish() {
        let mut feed = Feed::new();
        let first = feed.publish(vec![1, 2, 3]);
        let second = feed.publish(vec![4]);
        assert_eq!(*first, vec![1, 2, 3]);
        assert!(Rc::ptr_eq(&second, &feed.latest().unwrap()));
    }

    #[test]
    fn test_unsubscribe() {
        let mut feed = Feed::new();
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        let id = feed.subscribe(move |_: &Rc<()>| *c.borrow_mut() += 1);
        feed.publish(());
        assert!(feed.unsubscribe(id));
        assert!(!feed.unsubscribe(id));
        feed.publish(());
        assert_eq!(*count.borrow(), 1);
    }
}
