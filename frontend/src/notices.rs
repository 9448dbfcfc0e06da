use leptos::*;

use client::ErrorKind;

#[leptos::component]
pub fn notice_bar() -> impl leptos::IntoView {
    let notices = expect_context::<crate::AppContext>().notices;

    let style = stylers::style! {
        "NoticeBar",
        .notice {
            display: flex;
            justify-content: space-between;

            margin: 0.5vh 1vw;
            padding: 0.5vh 1vw;

            color: #f1f1f1;
            background-color: #8a2f2f;
            border-radius: 5px;
        }

        .conflict {
            background-color: #8a6a2f;
        }
    };

    let entries = move || {
        notices
            .with(|n| n.iter().cloned().collect::<Vec<_>>())
            .into_iter()
            .map(|notice| {
                let id = notice.id;
                let conflict = notice.kind == ErrorKind::Conflict;

                view! {class = style,
                    <div class="notice" class:conflict=conflict>
                        <span>{ notice.message }</span>
                        <button on:click=move |_| notices.update(|n| n.dismiss(id))>
                            Dismiss
                        </button>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div>
            { entries }
        </div>
    }
}
