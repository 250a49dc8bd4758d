//! Staff team board: plain post and read, no live updates.

use crate::errors::{BookingError, BookingResult};
use crate::models::{
    message::{MessageQuery, NewTeamMessage, PostMessageRequest, TeamMessage},
    user::User,
};
use crate::store::MessageStore;

pub struct TeamBoard<'a> {
    messages: &'a dyn MessageStore,
}

impl<'a> TeamBoard<'a> {
    pub fn new(messages: &'a dyn MessageStore) -> Self {
        Self { messages }
    }

    pub async fn post(&self, author: &User, request: &PostMessageRequest) -> BookingResult<TeamMessage> {
        require_staff(author)?;
        let text = request.validated_text()?;

        Ok(self
            .messages
            .post_message(&NewTeamMessage {
                user_id: author.id,
                user_name: author.label().to_string(),
                text: text.to_string(),
            })
            .await?)
    }

    pub async fn recent(&self, reader: &User, query: &MessageQuery) -> BookingResult<Vec<TeamMessage>> {
        require_staff(reader)?;
        Ok(self.messages.recent_messages(query.effective_limit()).await?)
    }
}

fn require_staff(user: &User) -> BookingResult<()> {
    if user.role.is_staff() {
        Ok(())
    } else {
        Err(BookingError::Authorization(
            "The team board is for staff only".to_string(),
        ))
    }
}
