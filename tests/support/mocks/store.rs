// tests/support/mocks/store.rs
use async_trait::async_trait;
use blog_core::domain::{
    category::{Category, CategoryId, CategoryRepository, CategoryWithCount, NewCategory},
    errors::{DomainError, DomainResult},
    post::{NewPost, Post, PostId, PostReadRepository, PostUpdate, PostWithCategory, PostWriteRepository},
    slug::{EntityId, EntityKind, Slug, SlugError, SlugExistence, SlugStamp},
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

#[derive(Default)]
struct State {
    posts: Vec<Post>,
    categories: Vec<Category>,
}

/// 投稿・カテゴリ・スラッグ存在確認をまとめて扱うインメモリストア
///
/// 一意制約は実データベースと同じく挿入時にも検査する。
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
    existence_calls: Arc<AtomicUsize>,
    views: Arc<AtomicUsize>,
    stale_existence: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn existence_calls(&self) -> usize {
        self.existence_calls.load(Ordering::SeqCst)
    }

    pub fn recorded_views(&self) -> usize {
        self.views.load(Ordering::SeqCst)
    }

    pub fn seed_post(&self, post: Post) {
        self.state.lock().unwrap().posts.push(post);
    }

    pub fn seed_category(&self, category: Category) {
        self.state.lock().unwrap().categories.push(category);
    }

    pub fn post(&self, id: Uuid) -> Option<Post> {
        let state = self.state.lock().unwrap();
        state.posts.iter().find(|p| p.id.0 == id).cloned()
    }

    /// 存在確認を常に「未使用」と答えさせる（確認後に他者が挿入した状況の再現）
    pub fn answer_existence_with_false(&self) {
        self.stale_existence.store(true, Ordering::SeqCst);
    }

    pub fn category_count(&self) -> usize {
        self.state.lock().unwrap().categories.len()
    }

    pub fn post_count(&self) -> usize {
        self.state.lock().unwrap().posts.len()
    }
}

impl State {
    fn with_category(&self, post: &Post) -> PostWithCategory {
        let category = post.category_id.and_then(|id| {
            self.categories
                .iter()
                .find(|c| c.id == id)
                .map(Category::summary)
        });
        PostWithCategory {
            post: post.clone(),
            category,
        }
    }

    /// 新しい順（作成時刻が同じなら後から追加したもの優先）
    fn published_newest_first(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().rev().filter(|p| p.is_published()).collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    fn post_slug_taken(&self, slug: &Slug, exclude: Option<Uuid>) -> bool {
        self.posts
            .iter()
            .any(|p| &p.slug == slug && Some(p.id.0) != exclude)
    }

    fn category_slug_taken(&self, slug: &Slug, exclude: Option<Uuid>) -> bool {
        self.categories
            .iter()
            .any(|c| &c.slug == slug && Some(c.id.0) != exclude)
    }
}

#[async_trait]
impl SlugExistence for InMemoryStore {
    async fn slug_exists(
        &self,
        slug: &Slug,
        kind: EntityKind,
        exclude: Option<EntityId>,
    ) -> DomainResult<bool> {
        self.existence_calls.fetch_add(1, Ordering::SeqCst);
        if self.stale_existence.load(Ordering::SeqCst) {
            return Ok(false);
        }
        let state = self.state.lock().unwrap();
        let exclude = exclude.map(Uuid::from);
        Ok(match kind {
            EntityKind::Post => state.post_slug_taken(slug, exclude),
            EntityKind::Category => state.category_slug_taken(slug, exclude),
        })
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryStore {
    async fn insert(&self, new: NewPost) -> DomainResult<PostWithCategory> {
        let mut state = self.state.lock().unwrap();
        if state.post_slug_taken(&new.slug, None) {
            return Err(SlugError::Taken {
                kind: EntityKind::Post,
            }
            .into());
        }
        let post = Post {
            id: PostId(Uuid::new_v4()),
            title: new.title,
            slug: new.slug,
            content: new.content,
            cover_image_url: new.cover_image_url,
            category_id: new.category_id,
            author_id: new.author_id,
            status: new.status,
            view_count: 0,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        state.posts.push(post.clone());
        Ok(state.with_category(&post))
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<PostWithCategory> {
        let mut state = self.state.lock().unwrap();
        if let Some(slug) = &update.slug {
            if state.post_slug_taken(slug, Some(update.id.0)) {
                return Err(SlugError::Taken {
                    kind: EntityKind::Post,
                }
                .into());
            }
        }
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(slug) = update.slug {
            post.slug = slug;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(cover) = update.cover_image_url {
            post.cover_image_url = cover;
        }
        if let Some(category) = update.category_id {
            post.category_id = category;
        }
        if let Some(status) = update.status {
            post.status = status;
        }
        post.updated_at = update.updated_at;

        let post = post.clone();
        Ok(state.with_category(&post))
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.posts.len();
        state.posts.retain(|p| p.id != id);
        if state.posts.len() == before {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }

    async fn record_view(&self, id: PostId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(post) = state.posts.iter_mut().find(|p| p.id == id) {
            post.view_count += 1;
            self.views.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<PostWithCategory>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .posts
            .iter()
            .find(|p| p.id == id)
            .map(|p| state.with_category(p)))
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<PostWithCategory>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .posts
            .iter()
            .find(|p| &p.slug == slug)
            .map(|p| state.with_category(p)))
    }

    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<PostWithCategory>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .published_newest_first()
            .into_iter()
            .take(limit as usize)
            .map(|p| state.with_category(p))
            .collect())
    }

    async fn list_by_category(
        &self,
        category_id: CategoryId,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<PostWithCategory>, u64)> {
        let state = self.state.lock().unwrap();
        let matching: Vec<&Post> = state
            .published_newest_first()
            .into_iter()
            .filter(|p| p.category_id == Some(category_id))
            .collect();
        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .map(|p| state.with_category(p))
            .collect();
        Ok((page, total))
    }

    async fn list_published_slugs(&self) -> DomainResult<Vec<SlugStamp>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .published_newest_first()
            .into_iter()
            .map(|p| SlugStamp {
                slug: p.slug.clone(),
                updated_at: p.updated_at,
            })
            .collect())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn insert(&self, new: NewCategory) -> DomainResult<Category> {
        let mut state = self.state.lock().unwrap();
        if state.category_slug_taken(&new.slug, None) {
            return Err(SlugError::Taken {
                kind: EntityKind::Category,
            }
            .into());
        }
        let category = Category {
            id: CategoryId(Uuid::new_v4()),
            name: new.name,
            slug: new.slug,
            description: new.description,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        state.categories.push(category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state.categories.iter().find(|c| &c.slug == slug).cloned())
    }

    async fn list_with_post_counts(&self) -> DomainResult<Vec<CategoryWithCount>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .categories
            .iter()
            .rev()
            .map(|c| CategoryWithCount {
                category: c.clone(),
                post_count: state
                    .posts
                    .iter()
                    .filter(|p| p.is_published() && p.category_id == Some(c.id))
                    .count() as i64,
            })
            .collect())
    }

    async fn list_slugs(&self) -> DomainResult<Vec<SlugStamp>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .categories
            .iter()
            .map(|c| SlugStamp {
                slug: c.slug.clone(),
                updated_at: c.updated_at,
            })
            .collect())
    }
}
