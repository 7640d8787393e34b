use log::warn;

use crate::{
    api,
    model::{Post, PostTarget},
};

/// То, через что публикуются посты.
pub trait Poster {
    fn submit(&self, target: &PostTarget, post: &Post) -> api::Result<Submission>;
}

/// Опубликованный пост.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Короткая ссылка на пост.
    pub link: String,
}

/// Результат отправки в один сабреддит.
#[derive(Debug)]
pub struct Delivery {
    pub forum: String,
    pub result: api::Result<Submission>,
}

impl Delivery {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Сабреддиты в которые опубликовать не удалось.
pub fn failed_forums(deliveries: &[Delivery]) -> Vec<&str> {
    deliveries
        .iter()
        .filter(|d| !d.is_ok())
        .map(|d| d.forum.as_str())
        .collect()
}

/// Публикует пост во все переданные сабреддиты по очереди.
/// Ошибка в одном сабреддите не мешает остальным.
pub fn dispatch<P: Poster>(poster: &P, targets: &[PostTarget], post: &Post) -> Vec<Delivery> {
    targets
        .iter()
        .map(|target| {
            let result = poster.submit(target, post);

            match &result {
                Ok(s) => println!("  ✓ Posted to r/{}: {}", target.forum, s.link),
                Err(e) => {
                    warn!("Пост в r/{} не опубликован: {}", target.forum, e);
                    println!("  ✗ Failed r/{}: {}", target.forum, e);
                }
            }

            Delivery {
                forum: target.forum.clone(),
                result,
            }
        })
        .collect()
}
