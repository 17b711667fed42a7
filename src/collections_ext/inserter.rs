use std::collections::{LinkedList, VecDeque};

/// write-only destination. `copy` pushes every produced value through it,
/// so the producer never needs to know how (or whether) the destination grows.
pub trait Sink<T> {
    fn write(&mut self, value: T);
}

impl<T, F> Sink<T> for F
where
    F: FnMut(T),
{
    fn write(&mut self, value: T) {
        self(value)
    }
}

/// containers that can append at the end
pub trait PushBack<T> {
    fn push_back(&mut self, value: T);
}

impl<T> PushBack<T> for Vec<T> {
    fn push_back(&mut self, value: T) {
        self.push(value);
    }
}

impl<T> PushBack<T> for VecDeque<T> {
    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }
}

impl<T> PushBack<T> for LinkedList<T> {
    fn push_back(&mut self, value: T) {
        LinkedList::push_back(self, value);
    }
}

impl PushBack<char> for String {
    fn push_back(&mut self, value: char) {
        self.push(value);
    }
}

/// containers that can prepend
pub trait PushFront<T> {
    fn push_front(&mut self, value: T);
}

impl<T> PushFront<T> for VecDeque<T> {
    fn push_front(&mut self, value: T) {
        VecDeque::push_front(self, value);
    }
}

impl<T> PushFront<T> for LinkedList<T> {
    fn push_front(&mut self, value: T) {
        LinkedList::push_front(self, value);
    }
}

/// every write appends to the wrapped container. no pre-sizing needed
#[derive(Debug)]
pub struct BackInserter<'a, C> {
    container: &'a mut C,
}

impl<'a, C> BackInserter<'a, C> {
    pub fn new(container: &'a mut C) -> Self {
        Self { container }
    }
}

impl<'a, C, T> Sink<T> for BackInserter<'a, C>
where
    C: PushBack<T>,
{
    fn write(&mut self, value: T) {
        self.container.push_back(value);
    }
}

/// every write prepends, so the copied values end up reversed
#[derive(Debug)]
pub struct FrontInserter<'a, C> {
    container: &'a mut C,
}

impl<'a, C> FrontInserter<'a, C> {
    pub fn new(container: &'a mut C) -> Self {
        Self { container }
    }
}

impl<'a, C, T> Sink<T> for FrontInserter<'a, C>
where
    C: PushFront<T>,
{
    fn write(&mut self, value: T) {
        self.container.push_front(value);
    }
}

/// position is decided by the container itself (sets, maps ...)
#[derive(Debug)]
pub struct Inserter<'a, C> {
    container: &'a mut C,
}

impl<'a, C> Inserter<'a, C> {
    pub fn new(container: &'a mut C) -> Self {
        Self { container }
    }
}

impl<'a, C, T> Sink<T> for Inserter<'a, C>
where
    C: Extend<T>,
{
    fn write(&mut self, value: T) {
        self.container.extend(std::iter::once(value));
    }
}

pub fn back_inserter<C>(container: &mut C) -> BackInserter<'_, C> {
    BackInserter::new(container)
}

pub fn front_inserter<C>(container: &mut C) -> FrontInserter<'_, C> {
    FrontInserter::new(container)
}

pub fn inserter<C>(container: &mut C) -> Inserter<'_, C> {
    Inserter::new(container)
}

/// write every value of `source` into `sink`, in order.
/// the sink is handed back so the caller can keep writing after the copy
pub fn copy<I, S>(source: I, mut sink: S) -> S
where
    I: IntoIterator,
    S: Sink<I::Item>,
{
    for value in source {
        sink.write(value);
    }
    sink
}
