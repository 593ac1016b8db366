use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::clock::{Clock, ThreadClock, TimerCallback};
use crate::config::Config;
use crate::engine::DerivedState;
use crate::engine::reference::ReferenceDates;
use crate::ui::theme::Theme;
use crate::widget::CountdownWidget;

/// What the presentation layer last received from the widget.
#[derive(Default)]
pub struct DashboardView {
    pub snapshot: Option<Rc<DerivedState>>,
    pub dirty: bool,
}

pub struct App<C: Clock = ThreadClock> {
    pub widget: CountdownWidget<C>,
    pub view: Rc<RefCell<DashboardView>>,
    pub theme: Theme,
    pub config: Config,
    pub should_quit: bool,
    started: Instant,
}

impl<C: Clock> App<C> {
    pub fn new(refs: ReferenceDates, clock: C, theme: Theme, config: Config) -> Self {
        let mut widget = CountdownWidget::new(refs, clock);
        let view = Rc::new(RefCell::new(DashboardView::default()));
        let sink = view.clone();
        widget.subscribe(move |snapshot| {
            let mut view = sink.borrow_mut();
            view.snapshot = Some(snapshot.clone());
            view.dirty = true;
        });

        Self {
            widget,
            view,
            theme,
            config,
            should_quit: false,
            started: Instant::now(),
        }
    }

    pub fn mount(&mut self, now: DateTime<Utc>, on_tick: TimerCallback) {
        self.started = Instant::now();
        self.widget.mount(now, on_tick);
    }

    pub fn on_tick(&mut self, now: DateTime<Utc>) {
        self.widget.tick(now);
    }

    pub fn unmount(&mut self) {
        self.widget.unmount();
    }

    pub fn snapshot(&self) -> Option<Rc<DerivedState>> {
        self.view.borrow().snapshot.clone()
    }

    /// Redraw when a new snapshot arrived, or every frame while the current
    /// dot is animating.
    pub fn needs_redraw(&self) -> bool {
        self.config.animate || self.view.borrow().dirty
    }

    pub fn mark_drawn(&self) {
        self.view.borrow_mut().dirty = false;
    }

    pub fn invalidate(&self) {
        self.view.borrow_mut().dirty = true;
    }

    pub fn pulse_elapsed(&self) -> Duration {
        if self.config.animate {
            self.started.elapsed()
        } else {
            Duration::ZERO
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
        }
    }
}
