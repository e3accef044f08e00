//! 资源缓存 - 按名称查找已解码的图片与音频
//!
//! 缓存在加载阶段写入、帧循环中只读。调用方需保证所有 `insert`
//! 都发生在第一帧之前；缓存本身不加锁。
//!
//! 查找永远不会失败：未命中时返回对应类型的兜底资源。

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use rodio::Source;

use crate::config::UiConfig;
use crate::error::{Result, UiError};
use crate::{Color, Surface};

/// 已解码的音频片段（交错 f32 采样）
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    channels: u16,
    sample_rate: u32,
    samples: Arc<[f32]>,
}

impl AudioClip {
    pub fn new(channels: u16, sample_rate: u32, samples: Vec<f32>) -> Self {
        Self {
            channels: channels.max(1),
            sample_rate: sample_rate.max(1),
            samples: samples.into(),
        }
    }

    /// 静音占位
    pub fn silent() -> Self {
        Self::new(1, 44_100, Vec::new())
    }

    /// 从文件解码
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| UiError::io(path, e))?;
        let decoder = rodio::Decoder::new(BufReader::new(file))?;
        let channels = decoder.channels();
        let sample_rate = decoder.sample_rate();
        let samples: Vec<f32> = decoder.convert_samples::<f32>().collect();
        Ok(Self::new(channels, sample_rate, samples))
    }

    pub fn channels(&self) -> u16 { self.channels }
    pub fn sample_rate(&self) -> u32 { self.sample_rate }
    pub fn samples(&self) -> &[f32] { &self.samples }

    pub fn is_silent(&self) -> bool {
        self.samples.is_empty()
    }

    /// 播放时长（秒）
    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / (self.channels as f32 * self.sample_rate as f32)
    }

    /// 生成可交给 rodio `Sink` 播放的音源
    pub fn source(&self) -> rodio::buffer::SamplesBuffer<f32> {
        rodio::buffer::SamplesBuffer::new(self.channels, self.sample_rate, self.samples.to_vec())
    }
}

/// 资源种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Images,
    Audio,
}

impl AssetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AssetKind::Images => "images",
            AssetKind::Audio => "audio",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 已解码资源
#[derive(Debug, Clone, PartialEq)]
pub enum Asset {
    Image(Surface),
    Audio(AudioClip),
}

impl Asset {
    pub fn kind(&self) -> AssetKind {
        match self {
            Asset::Image(_) => AssetKind::Images,
            Asset::Audio(_) => AssetKind::Audio,
        }
    }
}

impl From<Surface> for Asset {
    fn from(surface: Surface) -> Self {
        Asset::Image(surface)
    }
}

impl From<AudioClip> for Asset {
    fn from(clip: AudioClip) -> Self {
        Asset::Audio(clip)
    }
}

/// 查找结果的借用视图
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AssetRef<'a> {
    Image(&'a Surface),
    Audio(&'a AudioClip),
}

impl<'a> AssetRef<'a> {
    pub fn as_image(self) -> Option<&'a Surface> {
        match self {
            AssetRef::Image(s) => Some(s),
            AssetRef::Audio(_) => None,
        }
    }

    pub fn as_audio(self) -> Option<&'a AudioClip> {
        match self {
            AssetRef::Audio(a) => Some(a),
            AssetRef::Image(_) => None,
        }
    }
}

/// 插入结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// 同名资源已存在，缓存未改变
    Duplicate,
    /// 内容为空，已丢弃
    Empty,
}

/// 资源缓存
#[derive(Debug)]
pub struct ResourceCache {
    images: HashMap<String, Surface>,
    audio: HashMap<String, AudioClip>,
    fallback_image: Surface,
    fallback_audio: AudioClip,
}

impl ResourceCache {
    /// 创建缓存并加载兜底资源；兜底文件缺失时使用占位资源
    pub fn new(config: &UiConfig) -> Self {
        let fallback_image = reference_image(&config.default_image_path).unwrap_or_else(|| {
            log::warn!("Missing image file '{}'", config.default_image_path.display());
            Surface::filled(1, 1, Color::BLACK)
        });

        let fallback_audio = reference_audio(&config.default_audio_path).unwrap_or_else(|| {
            log::warn!("Missing audio file '{}'", config.default_audio_path.display());
            AudioClip::silent()
        });

        Self::with_fallbacks(fallback_image, fallback_audio)
    }

    /// 使用给定的兜底资源创建空缓存
    pub fn with_fallbacks(fallback_image: Surface, fallback_audio: AudioClip) -> Self {
        Self {
            images: HashMap::new(),
            audio: HashMap::new(),
            fallback_image,
            fallback_audio,
        }
    }

    /// 插入资源，同名资源只保留第一次写入
    pub fn insert<A: Into<Asset>>(&mut self, content: Option<A>, name: &str) -> InsertOutcome {
        let Some(content) = content else {
            log::warn!("Skipped loading of empty element '{}'", name);
            return InsertOutcome::Empty;
        };

        match content.into() {
            Asset::Image(surface) => {
                if self.images.contains_key(name) {
                    log::warn!("Skipped content, as it would overwrite image '{}'", name);
                    return InsertOutcome::Duplicate;
                }
                log::info!("Loaded image '{}'", name);
                self.images.insert(name.to_string(), surface);
            }
            Asset::Audio(clip) => {
                if self.audio.contains_key(name) {
                    log::warn!("Skipped content, as it would overwrite sound '{}'", name);
                    return InsertOutcome::Duplicate;
                }
                log::info!("Loaded sound '{}'", name);
                self.audio.insert(name.to_string(), clip);
            }
        }
        InsertOutcome::Inserted
    }

    /// 按名称和种类查找，未命中时返回兜底资源
    pub fn lookup(&self, name: &str, kind: AssetKind, ignore_missing: bool) -> AssetRef<'_> {
        match kind {
            AssetKind::Images => AssetRef::Image(self.image(name, ignore_missing)),
            AssetKind::Audio => AssetRef::Audio(self.audio(name, ignore_missing)),
        }
    }

    pub fn image(&self, name: &str, ignore_missing: bool) -> &Surface {
        match self.images.get(name) {
            Some(surface) => surface,
            None => {
                Self::report_missing(name, AssetKind::Images, ignore_missing);
                &self.fallback_image
            }
        }
    }

    pub fn audio(&self, name: &str, ignore_missing: bool) -> &AudioClip {
        match self.audio.get(name) {
            Some(clip) => clip,
            None => {
                Self::report_missing(name, AssetKind::Audio, ignore_missing);
                &self.fallback_audio
            }
        }
    }

    fn report_missing(name: &str, kind: AssetKind, ignore_missing: bool) {
        if !ignore_missing {
            log::warn!(
                "There is no such element as '{}' of type '{}'; pass ignore_missing to silence this",
                name,
                kind
            );
        }
    }

    pub fn contains(&self, name: &str, kind: AssetKind) -> bool {
        match kind {
            AssetKind::Images => self.images.contains_key(name),
            AssetKind::Audio => self.audio.contains_key(name),
        }
    }

    pub fn len(&self, kind: AssetKind) -> usize {
        match kind {
            AssetKind::Images => self.images.len(),
            AssetKind::Audio => self.audio.len(),
        }
    }

    pub fn fallback_image(&self) -> &Surface {
        &self.fallback_image
    }

    pub fn fallback_audio(&self) -> &AudioClip {
        &self.fallback_audio
    }
}

/// 加载图片；文件缺失或解码失败时返回 None
pub fn reference_image(path: impl AsRef<Path>) -> Option<Surface> {
    let path = path.as_ref();
    match Surface::load(path) {
        Ok(surface) => Some(surface),
        Err(e) => {
            log::debug!("Could not load image '{}': {}", path.display(), e);
            None
        }
    }
}

/// 加载音频；文件缺失或解码失败时返回 None
pub fn reference_audio(path: impl AsRef<Path>) -> Option<AudioClip> {
    let path = path.as_ref();
    match AudioClip::load(path) {
        Ok(clip) => Some(clip),
        Err(e) => {
            log::debug!("Could not load audio '{}': {}", path.display(), e);
            None
        }
    }
}
