use std::collections::VecDeque;
use std::time::{Duration, Instant};

const NOTIFICATION_TTL: Duration = Duration::from_secs(4);
const MAX_NOTIFICATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    created: Instant,
}

/// Short-lived toasts shown in the corner of the window.
pub struct Notifications {
    items: VecDeque<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push_at(message.into(), NotificationLevel::Info, Instant::now());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push_at(message.into(), NotificationLevel::Error, Instant::now());
    }

    fn push_at(&mut self, message: String, level: NotificationLevel, created: Instant) {
        if self.items.len() >= MAX_NOTIFICATIONS {
            self.items.pop_front();
        }
        self.items.push_back(Notification {
            message,
            level,
            created,
        });
    }

    pub fn prune(&mut self, now: Instant) {
        self.items
            .retain(|n| now.saturating_duration_since(n.created) < NOTIFICATION_TTL);
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn render(&mut self, ctx: &egui::Context) {
        self.prune(Instant::now());
        if self.items.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("notifications"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -36.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for notification in &self.items {
                    let color = match notification.level {
                        NotificationLevel::Info => egui::Color32::from_rgb(40, 90, 160),
                        NotificationLevel::Error => egui::Color32::from_rgb(170, 40, 40),
                    };
                    egui::Frame::popup(ui.style())
                        .fill(color)
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&notification.message)
                                    .color(egui::Color32::WHITE),
                            );
                        });
                    ui.add_space(4.0);
                }
            });
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}
