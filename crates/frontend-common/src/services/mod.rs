pub mod auth;
pub mod disbursements;
pub mod donors;
pub mod grants;
pub mod reports;
pub mod reviews;
pub mod subgrantees;

pub use auth::AuthApiService;
pub use disbursements::DisbursementApiService;
pub use donors::DonorApiService;
pub use grants::GrantApiService;
pub use reports::ReportApiService;
pub use reviews::ReviewApiService;
pub use subgrantees::SubgranteeApiService;
