use chrono::{Datelike, Local};
use leptos::ev;
use leptos::logging::{error, log, warn};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::{path, NavigateOptions};

pub mod api;
pub mod debounce;
pub mod error;
pub mod feed;
pub mod format;
pub mod pagination;
pub mod preferences;
pub mod time_range;
pub mod viewport;

use crate::api::{search_repositories, Repository, SearchRequest};
use crate::debounce::SearchDebouncer;
use crate::feed::{DisplayState, FeedState};
use crate::format::{format_number, language_color};
use crate::preferences::{load_page_size, save_page_size, BrowserStorage};
use crate::time_range::TimeRange;
use crate::viewport::{current_width, ViewportClass};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| "Page not found">
                <Route path=path!("/") view=TrendingPage />
            </Routes>
        </Router>
    }
}

#[component]
fn TrendingPage() -> impl IntoView {
    let query_map = use_query_map();
    let navigate = use_navigate();

    // The selected window lives in the URL (`?since=week`) so it can be shared.
    let time_range = Memo::new(move |_| {
        query_map.with(|params| {
            params
                .get("since")
                .and_then(|since| since.parse::<TimeRange>().ok())
                .unwrap_or_default()
        })
    });
    let (query, set_query) = signal(String::new());
    let (width, set_width) = signal(current_width());
    let viewport = Memo::new(move |_| ViewportClass::from_width(width.get()));
    let fetch_limit = Memo::new(move |_| viewport.get().fetch_limit());
    let (preferred_size, set_preferred_size) = signal(load_page_size(&BrowserStorage));
    let page_size = Memo::new(move |_| viewport.get().effective_page_size(preferred_size.get()));
    let feed = RwSignal::new(FeedState::default());
    let debouncer = StoredValue::new_local(SearchDebouncer::default());

    let resize = window_event_listener(ev::resize, move |_| set_width.set(current_width()));
    on_cleanup(move || resize.remove());

    let fetch = move |text: String| {
        let request = SearchRequest::new(
            &text,
            time_range.get_untracked(),
            Local::now().date_naive(),
            fetch_limit.get_untracked(),
        );
        let Some(token) = feed.try_update(FeedState::begin) else {
            return;
        };
        log!("searching {}", request.url());

        leptos::task::spawn_local(async move {
            let result = search_repositories(&request).await;
            if let Err(e) = &result {
                error!("search failed: {}", e);
            }
            if feed.try_update(|state| state.complete(token, result)) == Some(false) {
                warn!("discarded response of a superseded search");
            }
        });
    };

    // Search immediately on mount and whenever the window or fetch limit changes
    Effect::new(move |_| {
        time_range.track();
        fetch_limit.track();
        debouncer.update_value(SearchDebouncer::cancel);
        fetch(query.get_untracked());
    });

    let select_range = move |range: TimeRange| {
        navigate(
            &format!("/?since={}", range),
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    };

    let go_to_page = Callback::new(move |page: usize| {
        feed.update(|state| state.set_page(page, page_size.get_untracked()));
    });

    view! {
        <Title text=move || format!("Trending repositories · {}", time_range.get().label()) />
        <div class="app">
            <header>
                <h1>"Trending Repositories"</h1>
                <p class="subtitle">"Discover the most starred open source projects created recently"</p>
            </header>

            <div class="controls">
                <div class="ranges">
                    {TimeRange::ALL.into_iter().map(|range| {
                        let select_range = select_range.clone();
                        view! {
                            <button
                                class=move || if time_range.get() == range { "range-btn active" } else { "range-btn" }
                                style=format!("border-color: {}", range.accent())
                                on:click=move |_| select_range(range)
                            >
                                {range.label()}
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <div class="search-box">
                    <input
                        type="text"
                        placeholder="Search by name, description or owner..."
                        prop:value=move || query.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_query.set(value.clone());
                            debouncer.update_value(|d| d.schedule(move || fetch(value)));
                        }
                    />
                </div>

                <label class="page-size">
                    "Per page: "
                    <select on:change=move |ev| {
                        match event_target_value(&ev).parse::<usize>() {
                            Ok(size) => {
                                set_preferred_size.set(size);
                                feed.update(FeedState::reset_page);
                                if let Err(e) = save_page_size(&BrowserStorage, size) {
                                    warn!("page size not saved: {}", e);
                                }
                            }
                            Err(e) => warn!("ignored page size selection: {}", e),
                        }
                    }>
                        {move || viewport.get().page_sizes().iter().map(|&size| {
                            view! {
                                <option value=size.to_string() selected=move || page_size.get() == size>
                                    {size}
                                </option>
                            }
                        }).collect::<Vec<_>>()}
                    </select>
                </label>
            </div>

            <div class="results">
                {move || match feed.with(FeedState::display) {
                    DisplayState::Loading => view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            <span>"Loading..."</span>
                        </div>
                    }.into_any(),
                    DisplayState::Failed(message) => view! {
                        <div class="error">
                            <p>{message}</p>
                            <button on:click=move |_| fetch(query.get_untracked())>"Retry"</button>
                        </div>
                    }.into_any(),
                    DisplayState::Empty => view! {
                        <div class="empty">"No repositories match your search."</div>
                    }.into_any(),
                    DisplayState::Results => {
                        let size = page_size.get();
                        let (items, page, pages) = feed.with(|state| {
                            let pages = state.paginator(size);
                            (state.page_items(size).to_vec(), state.page(size), pages)
                        });
                        let found = view! {
                            <p class="results-count">
                                {format!("{} repositories found", format_number(feed.with(FeedState::total_count)))}
                            </p>
                        };
                        if viewport.get().is_narrow() {
                            view! { {found} <RepoCarousel repositories=items /> }.into_any()
                        } else {
                            view! {
                                {found}
                                <RepoGrid repositories=items />
                                <Pager
                                    page=page
                                    total_pages=pages.total_pages()
                                    has_previous=pages.has_previous(page)
                                    has_next=pages.has_next(page)
                                    on_select=go_to_page
                                />
                            }.into_any()
                        }
                    }
                }}
            </div>

            <footer>
                {format!("Data from the GitHub API · © {}", Local::now().year())}
            </footer>
        </div>
    }
}

#[component]
fn RepoGrid(repositories: Vec<Repository>) -> impl IntoView {
    view! {
        <div class="grid">
            <For each=move || repositories.clone() key=|repo| repo.id let:repo>
                <RepoCard repo=repo />
            </For>
        </div>
    }
}

/// Single scrollable row used on narrow screens instead of the pager.
#[component]
fn RepoCarousel(repositories: Vec<Repository>) -> impl IntoView {
    view! {
        <div class="carousel">
            <For each=move || repositories.clone() key=|repo| repo.id let:repo>
                <RepoCard repo=repo />
            </For>
        </div>
    }
}

#[component]
fn RepoCard(repo: Repository) -> impl IntoView {
    let Repository {
        name,
        html_url,
        description,
        language,
        stargazers_count,
        forks_count,
        owner,
        ..
    } = repo;
    let description = description.unwrap_or_else(|| "No description provided".to_string());
    let language = language.map(|language| {
        let style = format!("background-color: {}", language_color(&language));
        view! { <span class="badge" style=style>{language}</span> }
    });
    let avatar_alt = owner.login.clone();

    view! {
        <article class="card">
            <div class="card-header">
                <img src=owner.avatar_url alt=avatar_alt class="avatar" />
                <div>
                    <p class="owner">{owner.login}</p>
                    <h3 class="repo-name">{name}</h3>
                </div>
            </div>
            <div class="card-body">
                <p class="description">{description}</p>
                <div class="badges">
                    {language}
                    <span class="badge forks-badge">"Forks: "{format_number(forks_count)}</span>
                    <span class="badge stars-badge">"★ "{format_number(stargazers_count)}</span>
                </div>
            </div>
            <a href=html_url target="_blank" rel="noopener noreferrer" class="repo-link">
                "View on GitHub"
            </a>
        </article>
    }
}

#[component]
fn Pager(
    page: usize,
    total_pages: usize,
    has_previous: bool,
    has_next: bool,
    on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <nav class="pager">
            <button disabled=!has_previous on:click=move |_| on_select.run(page.saturating_sub(1))>
                "Previous"
            </button>
            <span>{format!("Page {} of {}", page, total_pages)}</span>
            <button disabled=!has_next on:click=move |_| on_select.run(page + 1)>
                "Next"
            </button>
        </nav>
    }
}
