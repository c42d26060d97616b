//! Transient notice banner

use leptos::prelude::*;
use lib_core::NoticeLevel;

use crate::state::coaching::use_coaching_context;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_coaching_context();
    let notice = ctx.notice;

    move || {
        let ctx = ctx.clone();
        notice.get().map(|notice| {
            let class = match notice.level {
                NoticeLevel::Info => "notice notice-info",
                NoticeLevel::Error => "notice notice-error",
            };
            view! {
                <div class=class role="status" on:click=move |_| ctx.dismiss_notice()>
                    {notice.message}
                </div>
            }
        })
    }
}
