use crate::{
    model::donation::{CreateDonationInput, DonationDto, DonationListDto, ListDonationsInput},
    server::{error::rpc::RpcError, rpc::RpcContext, service::DonationService},
};

/// `donation.list`
pub async fn list(ctx: RpcContext, input: ListDonationsInput) -> Result<DonationListDto, RpcError> {
    let donations = DonationService::new(&ctx.db)
        .list(input.campaign_id)
        .await?;

    Ok(DonationListDto { donations })
}

/// `donation.create`, anonymous unless a user is signed in
pub async fn create(ctx: RpcContext, input: CreateDonationInput) -> Result<DonationDto, RpcError> {
    Ok(DonationService::new(&ctx.db)
        .create(input, ctx.user_id)
        .await?)
}
