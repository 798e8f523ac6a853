//! Built-in filter schemas for the seven report pages.
//!
//! Field order matters: the renderer lays controls out in the order they
//! appear here. Primary fields are always visible, advanced fields sit
//! behind the expand toggle.

use super::types::{FieldDescriptor, PageSchema, SelectOption};

/// Shared audit-status options (pending / approved / rejected).
fn audit_status_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("0", "待审核"),
        SelectOption::new("1", "已通过"),
        SelectOption::new("2", "已拒绝"),
    ]
}

/// Account transactions report (财务管理 - 账户明细).
pub fn transactions_schema() -> PageSchema {
    PageSchema::new(
        vec![
            FieldDescriptor::date("start_date", "开始日期"),
            FieldDescriptor::date("end_date", "结束日期"),
            FieldDescriptor::select(
                "type",
                "全部类型",
                vec![
                    SelectOption::new("1", "存款"),
                    SelectOption::new("2", "取款"),
                    SelectOption::new("3", "投注"),
                    SelectOption::new("4", "派彩"),
                    SelectOption::new("5", "红利"),
                    SelectOption::new("6", "洗码"),
                ],
            ),
            FieldDescriptor::select("status", "全部状态", audit_status_options()),
        ],
        vec![
            FieldDescriptor::text("order_no", "订单号"),
            FieldDescriptor::text("username", "会员账号"),
            FieldDescriptor::number("user_id", "用户ID"),
            FieldDescriptor::number("amount_min", "最小金额"),
            FieldDescriptor::number("amount_max", "最大金额"),
        ],
    )
}

/// Bet list report (注单管理 - 注单列表).
pub fn bets_schema() -> PageSchema {
    PageSchema::new(
        vec![
            FieldDescriptor::date("start_date", "开始日期"),
            FieldDescriptor::date("end_date", "结束日期"),
            FieldDescriptor::select(
                "game_type",
                "全部游戏",
                vec![
                    SelectOption::plain("百家乐"),
                    SelectOption::plain("龙虎"),
                    SelectOption::plain("轮盘"),
                    SelectOption::plain("骰宝"),
                    SelectOption::plain("牛牛"),
                ],
            ),
            FieldDescriptor::select(
                "status",
                "全部状态",
                vec![
                    SelectOption::new("0", "未结算"),
                    SelectOption::new("1", "已结算"),
                    SelectOption::new("2", "已取消"),
                    SelectOption::new("3", "废单"),
                ],
            ),
        ],
        vec![
            FieldDescriptor::text("bet_no", "注单号"),
            FieldDescriptor::text("username", "玩家账号"),
            FieldDescriptor::number("user_id", "用户ID"),
            FieldDescriptor::number("bet_amount_min", "最小投注金额"),
            FieldDescriptor::number("bet_amount_max", "最大投注金额"),
        ],
    )
}

/// Player roster (会员管理 - 玩家讯息).
pub fn players_schema() -> PageSchema {
    PageSchema::new(
        vec![
            FieldDescriptor::text("username", "玩家账号/昵称"),
            FieldDescriptor::number("user_id", "用户ID"),
            FieldDescriptor::select(
                "status",
                "全部状态",
                vec![
                    SelectOption::new("1", "正常"),
                    SelectOption::new("0", "冻结"),
                    SelectOption::new("2", "锁定"),
                ],
            ),
            FieldDescriptor::select(
                "vip_level",
                "VIP等级",
                (0..=6)
                    .map(|level| SelectOption::new(level.to_string(), format!("VIP{}", level)))
                    .collect(),
            ),
        ],
        vec![
            FieldDescriptor::text("agent_username", "所属代理"),
            FieldDescriptor::number("balance_min", "最小余额"),
            FieldDescriptor::number("balance_max", "最大余额"),
            FieldDescriptor::date("register_start", "注册开始日期"),
            FieldDescriptor::date("register_end", "注册结束日期"),
        ],
    )
}

/// Commission records (佣金管理 - 佣金记录).
pub fn commission_records_schema() -> PageSchema {
    PageSchema::new(
        vec![
            FieldDescriptor::date("start_date", "开始日期"),
            FieldDescriptor::date("end_date", "结束日期"),
            FieldDescriptor::select(
                "claim_status",
                "领取状态",
                vec![
                    SelectOption::new("0", "待领取"),
                    SelectOption::new("1", "已领取"),
                    SelectOption::new("2", "已过期"),
                    SelectOption::new("3", "自动到账"),
                ],
            ),
            FieldDescriptor::select("audit_status", "审核状态", audit_status_options()),
        ],
        vec![
            FieldDescriptor::text("username", "会员账号"),
            FieldDescriptor::number("user_id", "用户ID"),
            FieldDescriptor::number("commission_min", "最小佣金金额"),
            FieldDescriptor::number("commission_max", "最大佣金金额"),
        ],
    )
}

/// Deposit requests (财务管理 - 存款申请).
pub fn deposits_schema() -> PageSchema {
    PageSchema::new(
        vec![
            FieldDescriptor::date("start_date", "开始日期"),
            FieldDescriptor::date("end_date", "结束日期"),
            FieldDescriptor::select("status", "全部状态", audit_status_options()),
        ],
        vec![
            FieldDescriptor::text("order_no", "订单号"),
            FieldDescriptor::text("username", "会员账号"),
            FieldDescriptor::number("amount_min", "最小金额"),
            FieldDescriptor::number("amount_max", "最大金额"),
        ],
    )
}

/// Withdrawal requests (财务管理 - 取款申请).
pub fn withdrawals_schema() -> PageSchema {
    // Same layout as deposits; kept separate so the pages can diverge.
    PageSchema::new(
        vec![
            FieldDescriptor::date("start_date", "开始日期"),
            FieldDescriptor::date("end_date", "结束日期"),
            FieldDescriptor::select("status", "全部状态", audit_status_options()),
        ],
        vec![
            FieldDescriptor::text("order_no", "订单号"),
            FieldDescriptor::text("username", "会员账号"),
            FieldDescriptor::number("amount_min", "最小金额"),
            FieldDescriptor::number("amount_max", "最大金额"),
        ],
    )
}

/// Risk alerts (风控管理 - 风险预警).
pub fn risk_alerts_schema() -> PageSchema {
    PageSchema::new(
        vec![
            FieldDescriptor::date("start_date", "开始日期"),
            FieldDescriptor::date("end_date", "结束日期"),
            FieldDescriptor::select(
                "alert_type",
                "预警类型",
                vec![
                    SelectOption::new("high_win_rate", "高胜率"),
                    SelectOption::new("large_bet", "大额投注"),
                    SelectOption::new("suspicious_pattern", "可疑模式"),
                ],
            ),
            FieldDescriptor::select(
                "severity",
                "严重级别",
                vec![
                    SelectOption::new("1", "低"),
                    SelectOption::new("2", "中"),
                    SelectOption::new("3", "高"),
                    SelectOption::new("4", "严重"),
                ],
            ),
        ],
        vec![
            FieldDescriptor::text("username", "玩家账号"),
            FieldDescriptor::number("user_id", "用户ID"),
            FieldDescriptor::select(
                "handle_status",
                "处理状态",
                vec![
                    SelectOption::new("0", "未处理"),
                    SelectOption::new("1", "处理中"),
                    SelectOption::new("2", "已处理"),
                ],
            ),
        ],
    )
}
