//! Read models of [`Task`]s across [`Tender`]s.
//!
//! [`Task`]: crate::domain::tender::Task
//! [`Tender`]: crate::domain::Tender

pub mod list {
    //! Cross-[`Tender`] [`Task`] listing.
    //!
    //! [`Task`]: crate::domain::tender::Task
    //! [`Tender`]: crate::domain::Tender

    use crate::domain::{
        employee,
        tender::{self, task, Task},
    };
    #[cfg(doc)]
    use crate::domain::{Employee, Tender};

    /// Single row of a cross-[`Tender`] [`Task`] listing.
    #[derive(Clone, Debug)]
    pub struct Summary {
        /// ID of the [`Tender`] owning the [`Task`].
        pub tender_id: tender::Id,

        /// Title of the [`Tender`] owning the [`Task`].
        pub tender_title: tender::Title,

        /// The listed [`Task`] itself.
        pub task: Task,

        /// Name of the assigned [`Employee`], if any.
        pub assignee: Option<employee::Name>,

        /// Indicator whether the [`Task`] is past its due date and not
        /// completed.
        pub overdue: bool,
    }

    /// Filtering of a [`Task`] listing.
    ///
    /// Both conditions must hold for a [`Task`] to be listed.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct Filter {
        /// Filtering by [`task::Status`].
        pub status: StatusFilter,

        /// Filtering by assignee.
        pub assignee: AssigneeFilter,
    }

    impl Filter {
        /// Indicates whether the provided [`Task`] passes this [`Filter`].
        #[must_use]
        pub fn matches(&self, task: &Task) -> bool {
            let status = match self.status {
                StatusFilter::Any => true,
                StatusFilter::Is(s) => task.status == s,
            };
            let assignee = match self.assignee {
                AssigneeFilter::Any => true,
                AssigneeFilter::Unassigned => task.assigned_to.is_none(),
                AssigneeFilter::Assigned(id) => {
                    task.assigned_to == Some(id)
                }
            };
            status && assignee
        }
    }

    /// Filtering of a [`Task`] listing by [`task::Status`].
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub enum StatusFilter {
        /// Any [`task::Status`] passes.
        #[default]
        Any,

        /// Only the provided [`task::Status`] passes.
        Is(task::Status),
    }

    /// Filtering of a [`Task`] listing by assignee.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub enum AssigneeFilter {
        /// Any assignment state passes.
        #[default]
        Any,

        /// Only unassigned [`Task`]s pass.
        Unassigned,

        /// Only [`Task`]s assigned to the exact [`Employee`] pass.
        Assigned(employee::Id),
    }

    /// Ordering of a [`Task`] listing.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct Sorting {
        /// [`SortKey`] to order by.
        pub key: SortKey,

        /// [`Direction`] to order in.
        pub direction: Direction,
    }

    impl Sorting {
        /// Returns the [`Sorting`] after the provided [`SortKey`] is picked
        /// on top of this one.
        ///
        /// Picking the current [`SortKey`] again flips the [`Direction`],
        /// while picking another one resets it to [`Direction::Ascending`].
        #[must_use]
        pub fn toggled(self, key: SortKey) -> Self {
            if self.key == key {
                Self {
                    key,
                    direction: self.direction.flipped(),
                }
            } else {
                Self {
                    key,
                    direction: Direction::Ascending,
                }
            }
        }
    }

    impl Default for Sorting {
        fn default() -> Self {
            Self {
                key: SortKey::DueDate,
                direction: Direction::Ascending,
            }
        }
    }

    /// Key of a [`Task`] listing [`Sorting`].
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum SortKey {
        /// By the [`Task`]'s title.
        Title,

        /// By the owning [`Tender`]'s title.
        TenderTitle,

        /// By the [`Task`]'s due date.
        DueDate,

        /// By the assignee's name, with unassigned [`Task`]s last.
        Assignee,

        /// By the [`task::Status`] lifecycle order.
        Status,
    }

    /// Direction of a [`Task`] listing [`Sorting`].
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum Direction {
        /// Smallest first.
        Ascending,

        /// Largest first.
        Descending,
    }

    impl Direction {
        /// Returns the opposite [`Direction`].
        #[must_use]
        pub fn flipped(self) -> Self {
            match self {
                Self::Ascending => Self::Descending,
                Self::Descending => Self::Ascending,
            }
        }
    }

    #[cfg(test)]
    mod spec {
        use super::{Direction, SortKey, Sorting};

        #[test]
        fn toggling_flips_only_the_same_key() {
            let sorting = Sorting::default();
            assert_eq!(sorting.key, SortKey::DueDate);
            assert_eq!(sorting.direction, Direction::Ascending);

            let flipped = sorting.toggled(SortKey::DueDate);
            assert_eq!(flipped.direction, Direction::Descending);

            let other = flipped.toggled(SortKey::Title);
            assert_eq!(other.key, SortKey::Title);
            assert_eq!(other.direction, Direction::Ascending);
        }
    }
}
