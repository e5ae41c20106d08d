//! [`Command`] for adding an [`Employee`] to the team.

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{employee, Employee},
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for adding a new [`Employee`] to the team.
#[derive(Clone, Debug, From)]
pub struct CreateEmployee {
    /// Name of the added [`Employee`].
    pub name: employee::Name,

    /// Code of the added [`Employee`].
    pub code: employee::Code,

    /// Job title of the added [`Employee`].
    pub job_title: employee::JobTitle,

    /// [`employee::Status`] of the added [`Employee`].
    pub status: employee::Status,
}

impl<Db, Ai> Command<CreateEmployee> for Service<Db, Ai>
where
    Db: Store<Insert<Employee>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = Employee;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateEmployee,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateEmployee {
            name,
            code,
            job_title,
            status,
        } = cmd;

        let employee = Employee {
            id: employee::Id::new(),
            name,
            code,
            job_title,
            status,
        };

        self.store()
            .execute(Insert(employee.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(employee)
    }
}

/// Error of [`CreateEmployee`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),
}
