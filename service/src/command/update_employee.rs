//! [`Command`] for editing an [`Employee`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{employee, Employee},
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for editing an [`Employee`].
///
/// Deactivating an [`Employee`] keeps their existing [`Task`] assignments
/// and history, but prevents new assignments.
///
/// [`Task`]: crate::domain::tender::Task
#[derive(Clone, Debug, From)]
pub struct UpdateEmployee {
    /// ID of the [`Employee`] to edit.
    pub employee_id: employee::Id,

    /// New name of the [`Employee`].
    pub name: employee::Name,

    /// New code of the [`Employee`].
    pub code: employee::Code,

    /// New job title of the [`Employee`].
    pub job_title: employee::JobTitle,

    /// New [`employee::Status`] of the [`Employee`].
    pub status: employee::Status,
}

impl<Db, Ai> Command<UpdateEmployee> for Service<Db, Ai>
where
    Db: Store<
            Select<By<Option<Employee>, employee::Id>>,
            Ok = Option<Employee>,
            Err = Traced<store::Error>,
        > + Store<Update<Employee>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = Employee;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateEmployee,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateEmployee {
            employee_id,
            name,
            code,
            job_title,
            status,
        } = cmd;

        let mut employee = self
            .store()
            .execute(Select(By::<Option<Employee>, _>::new(employee_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::EmployeeNotExists(employee_id))
            .map_err(tracerr::wrap!())?;

        employee.name = name;
        employee.code = code;
        employee.job_title = job_title;
        employee.status = status;

        self.store()
            .execute(Update(employee.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(employee)
    }
}

/// Error of [`UpdateEmployee`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),

    /// [`Employee`] doesn't exist.
    #[display("`Employee(id: {_0})` does not exist")]
    #[from(ignore)]
    EmployeeNotExists(#[error(not(source))] employee::Id),
}
