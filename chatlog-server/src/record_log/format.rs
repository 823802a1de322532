//! Text template for one record block.
//!
//! Labels are display strings shared with whatever reads `record.txt`; keep
//! them byte-for-byte stable.

use std::fmt::Write;

use crate::schemas::record::ChatRecord;

pub const RECORD_MARKER: &str = "对话记录";
pub const TIME_LABEL: &str = "时间";
pub const ID_LABEL: &str = "对话ID";
pub const USER_LABEL: &str = "用户";
pub const REASONING_LABEL: &str = "思考过程";
pub const RESPONSE_LABEL: &str = "回复";
pub const DURATION_LABEL: &str = "思考用时";
pub const DURATION_SUFFIX: &str = "秒";
pub const CLOSING_MARKER: &str = "===============";

/// Render `record` as a newline-framed text block.
pub fn render_block(record: &ChatRecord) -> String {
    let mut block = String::with_capacity(
        128 + record.user_message.len() + record.bot_reasoning.len() + record.bot_response.len(),
    );
    // Writing into a String cannot fail.
    let _ = write!(
        block,
        "\n=== {RECORD_MARKER} ===\n\
         {TIME_LABEL}: {}\n\
         {ID_LABEL}: {}\n\
         {USER_LABEL}: {}\n\
         {REASONING_LABEL}: {}\n\
         {RESPONSE_LABEL}: {}\n\
         {DURATION_LABEL}: {}{DURATION_SUFFIX}\n\
         {CLOSING_MARKER}\n",
        record.timestamp,
        record.chat_id,
        record.user_message,
        record.bot_reasoning,
        record.bot_response,
        record.thinking_time,
    );
    block
}
