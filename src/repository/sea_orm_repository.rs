use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use super::TradeRepository;
use crate::models::{
    configuration, historical_trade, long_position, long_term_performance, open_trade,
    trade_datapoint,
};
use crate::services::pagination::PageRequest;

pub struct SeaOrmTradeRepository {
    db: DatabaseConnection,
}

impl SeaOrmTradeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TradeRepository for SeaOrmTradeRepository {
    async fn open_trades(&self) -> Result<Vec<open_trade::Model>, DbErr> {
        open_trade::Entity::find()
            .order_by_desc(open_trade::Column::OpenedTime)
            .all(&self.db)
            .await
    }

    async fn historical_trades_page(
        &self,
        request: PageRequest,
    ) -> Result<Vec<historical_trade::Model>, DbErr> {
        let Some(offset) = request.offset() else {
            return Ok(Vec::new());
        };

        // trade_id en second critère : ordre total, donc pas de doublon dans une page
        historical_trade::Entity::find()
            .order_by_desc(historical_trade::Column::ClosedTime)
            .order_by_asc(historical_trade::Column::TradeId)
            .offset(offset)
            .limit(request.limit())
            .all(&self.db)
            .await
    }

    async fn historical_trades_closed_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<historical_trade::Model>, DbErr> {
        historical_trade::Entity::find()
            .filter(historical_trade::Column::ClosedTime.gte(since))
            .order_by_desc(historical_trade::Column::ClosedTime)
            .all(&self.db)
            .await
    }

    async fn datapoints(&self, trade_id: &str) -> Result<Vec<trade_datapoint::Model>, DbErr> {
        trade_datapoint::Entity::find()
            .filter(trade_datapoint::Column::TradeId.eq(trade_id))
            .order_by_asc(trade_datapoint::Column::Timestamp)
            .all(&self.db)
            .await
    }

    async fn latest_datapoint(
        &self,
        trade_id: &str,
    ) -> Result<Option<trade_datapoint::Model>, DbErr> {
        trade_datapoint::Entity::find()
            .filter(trade_datapoint::Column::TradeId.eq(trade_id))
            .order_by_desc(trade_datapoint::Column::Timestamp)
            .one(&self.db)
            .await
    }

    async fn system_config(&self) -> Result<Option<configuration::Model>, DbErr> {
        configuration::Entity::find().one(&self.db).await
    }

    async fn long_term_performance(&self) -> Result<Option<long_term_performance::Model>, DbErr> {
        long_term_performance::Entity::find().one(&self.db).await
    }

    async fn long_positions(&self) -> Result<Vec<long_position::Model>, DbErr> {
        long_position::Entity::find()
            .order_by_asc(long_position::Column::Symbol)
            .all(&self.db)
            .await
    }

    async fn ping(&self) -> Result<(), DbErr> {
        self.db.ping().await
    }
}
