//! [`Command`] definition.
//!
//! Each [`Command`] runs to completion against the backing store before the
//! next one starts, so no intermediate states are ever observable. Execution
//! errors fall into four families: a failed store operation, a referenced
//! entity that does not exist, an argument rejected by validation, and a
//! collaborator response that cannot be applied.

pub mod add_attachment;
pub mod add_task;
pub mod add_vehicle;
pub mod assign_task;
pub mod create_employee;
pub mod create_tender;
pub mod create_vehicle_type;
pub mod delete_attachment;
pub mod delete_task;
pub mod delete_tender;
pub mod delete_vehicle;
pub mod delete_vehicle_type;
pub mod duplicate_tender;
pub mod suggest_task_assignee;
pub mod update_employee;
pub mod update_task_details;
pub mod update_task_status;
pub mod update_tender;
pub mod update_tender_remarks;
pub mod update_vehicle_type;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    add_attachment::AddAttachment, add_task::AddTask, add_vehicle::AddVehicle,
    assign_task::AssignTask, create_employee::CreateEmployee,
    create_tender::CreateTender, create_vehicle_type::CreateVehicleType,
    delete_attachment::DeleteAttachment, delete_task::DeleteTask,
    delete_tender::DeleteTender, delete_vehicle::DeleteVehicle,
    delete_vehicle_type::DeleteVehicleType,
    duplicate_tender::DuplicateTender,
    suggest_task_assignee::SuggestTaskAssignee,
    update_employee::UpdateEmployee, update_task_details::UpdateTaskDetails,
    update_task_status::UpdateTaskStatus, update_tender::UpdateTender,
    update_tender_remarks::UpdateTenderRemarks,
    update_vehicle_type::UpdateVehicleType,
};
