//! Scene model: the authoritative, observable list of shape commands.
//!
//! Shapes themselves carry no notification duty. Every mutation goes through
//! [`PaintModel`], which broadcasts a [`ModelEvent`] to its subscribers so a
//! view can refresh.

use crate::render::Renderer;
use crate::scene::DrawList;
use crate::shapes::ShapeCommand;

/// What changed in a [`PaintModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelEvent {
    /// A shape was appended at `index`.
    Added { index: usize },
    /// The shape at `index` was mutated in place.
    Changed { index: usize },
    /// All shapes were removed.
    Reset,
    /// The whole list was swapped out (e.g. after loading a file).
    Replaced { len: usize },
}

/// Handle returned by [`PaintModel::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&ModelEvent)>;

/// Ordered shape list plus its observers.
#[derive(Default)]
pub struct PaintModel {
    commands: Vec<ShapeCommand>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl PaintModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `observer`; it is called after every mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&ModelEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a subscriber. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    #[inline]
    pub fn commands(&self) -> &[ShapeCommand] {
        &self.commands
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn add_command(&mut self, command: impl Into<ShapeCommand>) {
        self.commands.push(command.into());
        let index = self.commands.len() - 1;
        self.notify(ModelEvent::Added { index });
    }

    /// Mutates the shape at `index` and notifies observers.
    ///
    /// Returns `None` (and notifies nobody) if `index` is out of range.
    pub fn update<T>(&mut self, index: usize, f: impl FnOnce(&mut ShapeCommand) -> T) -> Option<T> {
        let shape = self.commands.get_mut(index)?;
        let out = f(shape);
        self.notify(ModelEvent::Changed { index });
        Some(out)
    }

    /// Removes every shape.
    pub fn reset(&mut self) {
        log::debug!("resetting scene ({} shapes)", self.commands.len());
        self.commands.clear();
        self.notify(ModelEvent::Reset);
    }

    /// Replaces the whole list, typically with the result of a file load.
    pub fn set_commands(&mut self, commands: Vec<ShapeCommand>) {
        self.commands = commands;
        let len = self.commands.len();
        self.notify(ModelEvent::Replaced { len });
    }

    /// Records every shape, in order, into `list`.
    pub fn record(&self, list: &mut DrawList) {
        for c in &self.commands {
            c.record(list);
        }
    }

    /// Draws every shape through `renderer`, back to front.
    pub fn draw_all<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let mut list = DrawList::new();
        self.record(&mut list);
        list.replay(renderer);
    }

    fn notify(&mut self, event: ModelEvent) {
        for (_, observer) in &mut self.observers {
            observer(&event);
        }
    }
}

impl Extend<ShapeCommand> for PaintModel {
    /// Appends each shape, notifying observers once per shape.
    fn extend<I: IntoIterator<Item = ShapeCommand>>(&mut self, iter: I) {
        for c in iter {
            self.add_command(c);
        }
    }
}

impl std::fmt::Debug for PaintModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaintModel")
            .field("commands", &self.commands)
            .field("observers", &self.observers.len())
            .finish()
    }
}
