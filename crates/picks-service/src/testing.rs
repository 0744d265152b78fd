//! In-memory repositories for service tests
//!
//! One mutex guards the whole store, so every trait call is a single
//! all-or-nothing step just like a store transaction.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use picks_common::BlobUrlResolver;
use picks_core::traits::{
    CommentRepository, PickQuery, PickRepository, ReactionRepository, RepoResult, UserRepository,
};
use picks_core::{
    Comment, CommentId, DomainError, NewComment, NewPick, Pick, PickId, Polarity, Reaction,
    ReactionState, ReactionTally, ReactionWrite, TargetKind, TargetRef, ToggleResult, User,
    UserId, UserRole,
};

use crate::services::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    next_id: i64,
    users: BTreeMap<UserId, User>,
    picks: BTreeMap<PickId, Pick>,
    comments: BTreeMap<CommentId, Comment>,
    reactions: HashMap<(TargetRef, UserId), Reaction>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn target_exists(&self, target: TargetRef) -> bool {
        match target {
            TargetRef::Pick(id) => self.picks.contains_key(&id),
            TargetRef::Comment(id) => self.comments.contains_key(&id),
        }
    }

    fn tally(&self, target: TargetRef) -> ReactionTally {
        self.reactions
            .values()
            .filter(|r| r.target == target)
            .fold(ReactionTally::default(), |mut tally, r| {
                match r.polarity {
                    Polarity::Like => tally.likes += 1,
                    Polarity::Dislike => tally.dislikes += 1,
                }
                tally
            })
    }
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A context whose four repositories are all this store
    pub fn context() -> ServiceContext {
        Self::context_for(Self::shared())
    }

    pub fn context_for(store: Arc<Self>) -> ServiceContext {
        ServiceContextBuilder::new()
            .user_repo(store.clone())
            .pick_repo(store.clone())
            .comment_repo(store.clone())
            .reaction_repo(store)
            .blob_urls(BlobUrlResolver::new("test-bucket", "sa-east-1"))
            .build()
            .unwrap()
    }

    pub async fn add_user(&self, name: &str, role: UserRole) -> UserId {
        let mut state = self.state.lock().await;
        let id = UserId::new(state.next_id());
        let mut user = User::new(id, name.to_string());
        user.role = role;
        state.users.insert(id, user);
        id
    }

    /// Reaction rows held for a target
    pub async fn reaction_rows(&self, target: TargetRef) -> usize {
        let state = self.state.lock().await;
        state.reactions.keys().filter(|(t, _)| *t == target).count()
    }

    /// Rows of any kind that still point at the pick
    pub async fn rows_referencing_pick(&self, pick_id: PickId) -> usize {
        let state = self.state.lock().await;
        let comment_ids: Vec<CommentId> = state
            .comments
            .values()
            .filter(|c| c.pick_id == pick_id)
            .map(|c| c.id)
            .collect();
        let reactions = state
            .reactions
            .keys()
            .filter(|(target, _)| match target {
                TargetRef::Pick(id) => *id == pick_id,
                TargetRef::Comment(id) => comment_ids.contains(id),
            })
            .count();
        usize::from(state.picks.contains_key(&pick_id)) + comment_ids.len() + reactions
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.state.lock().await.users.get(&id).cloned())
    }

    async fn find_many(&self, ids: &[UserId]) -> RepoResult<Vec<User>> {
        let state = self.state.lock().await;
        Ok(ids.iter().filter_map(|id| state.users.get(id).cloned()).collect())
    }
}

#[async_trait]
impl PickRepository for MemoryStore {
    async fn find_by_id(&self, id: PickId) -> RepoResult<Option<Pick>> {
        Ok(self.state.lock().await.picks.get(&id).cloned())
    }

    async fn list_recent(&self, query: PickQuery) -> RepoResult<Vec<Pick>> {
        let state = self.state.lock().await;
        let cursor = match query.before {
            Some(id) => match state.picks.get(&id) {
                Some(p) => Some((p.created_at, p.id)),
                None => return Ok(Vec::new()),
            },
            None => None,
        };

        let mut picks: Vec<Pick> = state
            .picks
            .values()
            .filter(|p| cursor.map_or(true, |c| (p.created_at, p.id) < c))
            .cloned()
            .collect();
        picks.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        picks.truncate(query.limit.clamp(1, 100) as usize);
        Ok(picks)
    }

    async fn create(&self, pick: &NewPick) -> RepoResult<Pick> {
        let mut state = self.state.lock().await;
        let now = Utc::now();
        let created = Pick {
            id: PickId::new(state.next_id()),
            owner_id: pick.owner_id,
            title: pick.title.clone(),
            image_ref: pick.image_ref.clone(),
            link: pick.link.clone(),
            created_at: now,
            updated_at: now,
        };
        state.picks.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, pick: &Pick) -> RepoResult<()> {
        let mut state = self.state.lock().await;
        match state.picks.get_mut(&pick.id) {
            Some(stored) => {
                stored.title = pick.title.clone();
                stored.link = pick.link.clone();
                stored.updated_at = pick.updated_at;
                Ok(())
            }
            None => Err(DomainError::PickNotFound(pick.id)),
        }
    }

    async fn delete_cascade(&self, id: PickId) -> RepoResult<bool> {
        let mut state = self.state.lock().await;
        if state.picks.remove(&id).is_none() {
            return Ok(false);
        }
        let comment_ids: Vec<CommentId> = state
            .comments
            .values()
            .filter(|c| c.pick_id == id)
            .map(|c| c.id)
            .collect();
        for comment_id in &comment_ids {
            state.comments.remove(comment_id);
        }
        state.reactions.retain(|(target, _), _| match target {
            TargetRef::Pick(p) => *p != id,
            TargetRef::Comment(c) => !comment_ids.contains(c),
        });
        Ok(true)
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<Comment>> {
        Ok(self.state.lock().await.comments.get(&id).cloned())
    }

    async fn find_by_pick(&self, pick_id: PickId) -> RepoResult<Vec<Comment>> {
        let state = self.state.lock().await;
        let mut comments: Vec<Comment> = state
            .comments
            .values()
            .filter(|c| c.pick_id == pick_id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| (c.created_at, c.id));
        Ok(comments)
    }

    async fn create(&self, comment: &NewComment) -> RepoResult<Comment> {
        let mut state = self.state.lock().await;
        if !state.picks.contains_key(&comment.pick_id) {
            return Err(DomainError::PickNotFound(comment.pick_id));
        }
        let now = Utc::now();
        let created = Comment {
            id: CommentId::new(state.next_id()),
            pick_id: comment.pick_id,
            owner_id: comment.owner_id,
            body: comment.body.clone(),
            created_at: now,
            updated_at: now,
        };
        state.comments.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_body(&self, id: CommentId, body: &str) -> RepoResult<Comment> {
        let mut state = self.state.lock().await;
        let stored = state
            .comments
            .get_mut(&id)
            .ok_or(DomainError::CommentNotFound(id))?;
        stored.body = body.to_string();
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete(&self, id: CommentId) -> RepoResult<bool> {
        let mut state = self.state.lock().await;
        if state.comments.remove(&id).is_none() {
            return Ok(false);
        }
        state
            .reactions
            .retain(|(target, _), _| *target != TargetRef::Comment(id));
        Ok(true)
    }

    async fn count_by_picks(&self, pick_ids: &[PickId]) -> RepoResult<HashMap<PickId, i64>> {
        let state = self.state.lock().await;
        let mut counts = HashMap::new();
        for comment in state.comments.values() {
            if pick_ids.contains(&comment.pick_id) {
                *counts.entry(comment.pick_id).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }
}

#[async_trait]
impl ReactionRepository for MemoryStore {
    async fn toggle(
        &self,
        target: TargetRef,
        user_id: UserId,
        polarity: Polarity,
    ) -> RepoResult<ToggleResult> {
        let mut state = self.state.lock().await;
        if !state.target_exists(target) {
            return Err(match target {
                TargetRef::Pick(id) => DomainError::PickNotFound(id),
                TargetRef::Comment(id) => DomainError::CommentNotFound(id),
            });
        }

        let key = (target, user_id);
        let current = ReactionState::from(state.reactions.get(&key).map(|r| r.polarity));
        let transition = current.toggle(polarity);
        match transition.write {
            ReactionWrite::Insert(p) => {
                state.reactions.insert(key, Reaction::new(target, user_id, p));
            }
            ReactionWrite::Update(p) => {
                if let Some(r) = state.reactions.get_mut(&key) {
                    r.polarity = p;
                }
            }
            ReactionWrite::Delete => {
                state.reactions.remove(&key);
            }
        }

        Ok(ToggleResult {
            action: transition.action,
            tally: state.tally(target),
        })
    }

    async fn find(&self, target: TargetRef, user_id: UserId) -> RepoResult<Option<Reaction>> {
        Ok(self
            .state
            .lock()
            .await
            .reactions
            .get(&(target, user_id))
            .cloned())
    }

    async fn tally_many(
        &self,
        kind: TargetKind,
        target_ids: &[i64],
    ) -> RepoResult<HashMap<i64, ReactionTally>> {
        let state = self.state.lock().await;
        Ok(target_ids
            .iter()
            .map(|&id| (id, state.tally(TargetRef::from_parts(kind, id))))
            .filter(|(_, tally)| tally.total() > 0)
            .collect())
    }

    async fn find_polarities(
        &self,
        kind: TargetKind,
        target_ids: &[i64],
        user_id: UserId,
    ) -> RepoResult<HashMap<i64, Polarity>> {
        let state = self.state.lock().await;
        Ok(target_ids
            .iter()
            .filter_map(|&id| {
                state
                    .reactions
                    .get(&(TargetRef::from_parts(kind, id), user_id))
                    .map(|r| (id, r.polarity))
            })
            .collect())
    }
}
