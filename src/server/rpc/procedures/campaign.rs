use crate::{
    model::{
        api::{DeletedDto, IdInput},
        campaign::{
            CampaignDto, CampaignListDto, CreateCampaignInput, ListCampaignsInput,
            UpdateCampaignInput,
        },
    },
    server::{error::rpc::RpcError, rpc::RpcContext, service::CampaignService},
};

/// `campaign.list`
pub async fn list(ctx: RpcContext, input: ListCampaignsInput) -> Result<CampaignListDto, RpcError> {
    let campaigns = CampaignService::new(&ctx.db).list(input).await?;

    Ok(CampaignListDto { campaigns })
}

/// `campaign.byId`
pub async fn by_id(ctx: RpcContext, input: IdInput) -> Result<CampaignDto, RpcError> {
    Ok(CampaignService::new(&ctx.db).get(input.id).await?)
}

/// `campaign.create`, attributed to the signed-in user when there is one
pub async fn create(ctx: RpcContext, input: CreateCampaignInput) -> Result<CampaignDto, RpcError> {
    Ok(CampaignService::new(&ctx.db)
        .create(input, ctx.user_id)
        .await?)
}

/// `campaign.update`
pub async fn update(ctx: RpcContext, input: UpdateCampaignInput) -> Result<CampaignDto, RpcError> {
    Ok(CampaignService::new(&ctx.db).update(input).await?)
}

/// `campaign.delete`
pub async fn delete(ctx: RpcContext, input: IdInput) -> Result<DeletedDto, RpcError> {
    let deleted = CampaignService::new(&ctx.db).delete(input.id).await?;

    Ok(DeletedDto { deleted })
}
