mod create;
mod detail;
mod list;

pub(crate) use create::CreateJobPage;
pub(crate) use detail::JobDetailPage;
pub(crate) use list::JobListPage;
