//! Skincare journal pages.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::types::{BlogPostDetail, BlogPostSummary};

/// Server function to list published posts.
#[server]
pub async fn list_blog_posts() -> Result<Vec<BlogPostSummary>, ServerFnError> {
    use crate::server_helpers::get_api_client;

    let api = get_api_client().await.map_err(|e| e.into_server_error())?;
    api.list_posts().await.map_err(|e| e.into_server_error())
}

/// Server function to fetch one post.
#[server]
pub async fn fetch_blog_post(id: String) -> Result<BlogPostDetail, ServerFnError> {
    use crate::server_helpers::get_api_client;
    use lumera_core::BlogPostId;

    let id: BlogPostId = id.parse().map_err(|_| ServerFnError::new("Not found"))?;
    let api = get_api_client().await.map_err(|e| e.into_server_error())?;
    api.get_post(id).await.map_err(|e| e.into_server_error())
}

/// Journal listing page.
#[component]
pub fn BlogPage() -> impl IntoView {
    let posts = Resource::new(|| (), |_| list_blog_posts());

    view! {
        <div class="blog-page">
            <h1>"Journal"</h1>
            <Suspense fallback=move || view! { <p>"Loading posts..."</p> }>
                {move || {
                    posts.get().map(|result| {
                        match result {
                            Ok(items) if items.is_empty() => view! {
                                <p class="empty-state">"Nothing published yet."</p>
                            }.into_any(),
                            Ok(items) => view! {
                                <ul class="post-list">
                                    {items.into_iter().map(|post| {
                                        let href = format!("/blog/{}", post.id);
                                        view! {
                                            <li class="post-item">
                                                <a href=href>
                                                    <h2>{post.title}</h2>
                                                    <p class="excerpt">{post.excerpt}</p>
                                                    <span class="byline">
                                                        {post.author}" · "{post.published_at}
                                                    </span>
                                                </a>
                                            </li>
                                        }
                                    }).collect_view()}
                                </ul>
                            }.into_any(),
                            Err(_) => view! {
                                <p class="error">"Failed to load posts."</p>
                            }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Single post page.
#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let post = Resource::new(
        move || params.read().get("id").unwrap_or_default(),
        fetch_blog_post,
    );

    view! {
        <div class="blog-post-page">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    post.get().map(|result| {
                        match result {
                            Ok(post) => view! {
                                <article class="post">
                                    <h1>{post.title}</h1>
                                    <p class="byline">{post.author}" · "{post.published_at}</p>
                                    <div class="post-body">{post.body}</div>
                                </article>
                            }.into_any(),
                            Err(_) => view! {
                                <p class="error">"Post not found."</p>
                            }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
