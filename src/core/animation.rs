use crate::core::dom::Document;
use crate::core::renderer::SkillTransition;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

pub type SharedDocument = Arc<Mutex<Document>>;

pub const DEFAULT_ANIMATION_DELAY: Duration = Duration::from_millis(500);

/// Deferred skill-bar transitions, one task per bar. Tasks belong to the
/// scheduler: cancelling or dropping it aborts whatever has not fired yet,
/// leaving those bars at their initial width.
#[derive(Debug)]
pub struct AnimationScheduler {
    delay: Duration,
    tasks: Vec<JoinHandle<()>>,
}

impl AnimationScheduler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            tasks: Vec::new(),
        }
    }

    pub fn schedule(&mut self, document: &SharedDocument, transitions: Vec<SkillTransition>) {
        self.tasks.retain(|task| !task.is_finished());

        for transition in transitions {
            let document = Arc::clone(document);
            let delay = self.delay;
            self.tasks.push(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let mut doc = document.lock().await;
                // 重新載入後舊的進度條已被移除
                if !doc.is_connected(transition.fill) {
                    return;
                }
                doc.set_style(transition.fill, "width", format!("{}%", transition.level));
                tracing::trace!("Skill bar animated to {}%", transition.level);
            }));
        }

        tracing::debug!(
            "Scheduled {} skill bar transitions in {:?}",
            self.pending(),
            self.delay
        );
    }

    pub fn pending(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }

    /// Aborts every transition that has not fired. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending();
        for task in self.tasks.drain(..) {
            task.abort();
        }
        if cancelled > 0 {
            tracing::debug!("Cancelled {} pending skill bar transitions", cancelled);
        }
        cancelled
    }

    /// Waits until every scheduled transition has been applied.
    pub async fn settle(&mut self) {
        for task in self.tasks.drain(..) {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    tracing::warn!("Skill bar transition failed: {}", e);
                }
            }
        }
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_ANIMATION_DELAY)
    }
}

impl Drop for AnimationScheduler {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared_with_fill() -> (SharedDocument, SkillTransition) {
        let mut doc = Document::new();
        let fill = doc.create_element("div");
        doc.set_style(fill, "width", "0%");
        doc.append_child(doc.root(), fill);
        (
            Arc::new(Mutex::new(doc)),
            SkillTransition { fill, level: 80 },
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_transition_applies_after_delay() {
        let (doc, transition) = shared_with_fill();
        let mut scheduler = AnimationScheduler::default();
        scheduler.schedule(&doc, vec![transition]);

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(doc.lock().await.style(transition.fill, "width"), Some("0%"));

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(doc.lock().await.style(transition.fill, "width"), Some("80%"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_leaves_bar_at_zero() {
        let (doc, transition) = shared_with_fill();
        let mut scheduler = AnimationScheduler::default();
        scheduler.schedule(&doc, vec![transition]);

        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.cancel_all(), 1);
        assert_eq!(scheduler.pending(), 0);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(doc.lock().await.style(transition.fill, "width"), Some("0%"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending() {
        let (doc, transition) = shared_with_fill();
        {
            let mut scheduler = AnimationScheduler::new(Duration::from_millis(100));
            scheduler.schedule(&doc, vec![transition]);
        }

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(doc.lock().await.style(transition.fill, "width"), Some("0%"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_waits_for_all() {
        let (doc, transition) = shared_with_fill();
        let mut scheduler = AnimationScheduler::default();
        scheduler.schedule(&doc, vec![transition]);

        scheduler.settle().await;
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(doc.lock().await.style(transition.fill, "width"), Some("80%"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_detached_bar_is_skipped() {
        let (doc, transition) = shared_with_fill();
        let mut scheduler = AnimationScheduler::default();
        scheduler.schedule(&doc, vec![transition]);
        doc.lock().await.detach(transition.fill);

        scheduler.settle().await;
        assert_eq!(doc.lock().await.style(transition.fill, "width"), Some("0%"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_removed_bar_slot_reuse_is_untouched() {
        let (doc, transition) = shared_with_fill();
        let mut scheduler = AnimationScheduler::default();
        scheduler.schedule(&doc, vec![transition]);

        let replacement = {
            let mut doc = doc.lock().await;
            doc.remove(transition.fill);
            let replacement = doc.create_element("div");
            let root = doc.root();
            doc.append_child(root, replacement);
            replacement
        };

        scheduler.settle().await;
        assert_eq!(doc.lock().await.style(replacement, "width"), None);
    }
}
