//! Ban model -> entity

use panel_core::entities::Ban;

use crate::models::BanModel;

impl From<BanModel> for Ban {
    fn from(model: BanModel) -> Self {
        Ban {
            id: model.id,
            ban_hash: model.ban_hash,
            identifier: model.identifier,
            creator_name: model.creator_name,
            creator_identifier: model.creator_identifier,
            reason: model.reason,
            timestamp: model.timestamp,
            expire: model.expire,
        }
    }
}
