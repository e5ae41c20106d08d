//! Marker types.

/// Marker type describing an assignment of work.
#[derive(Clone, Copy, Debug)]
pub struct Assignment;

/// Marker type describing a completion of work.
#[derive(Clone, Copy, Debug)]
pub struct Completion;

/// Marker type describing a deadline.
#[derive(Clone, Copy, Debug)]
pub struct Due;

/// Marker type describing a planned start.
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Marker type describing a planned end.
#[derive(Clone, Copy, Debug)]
pub struct End;
