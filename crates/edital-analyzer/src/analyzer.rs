//! The analyzer facade

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::status::AnalyzerStatus;
use edital_cache::{open_backend, AnalysisCache, CacheBackend};
use edital_domain::AnalysisResult;
use edital_extractor::{HeaderExtractor, RequirementExtractor};
use edital_ner::{load_model, EntityRecognizer, EntityRuler, LanguageModel};
use edital_patterns::PatternTable;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

/// Everything loaded by [`EditalAnalyzer::initialize`]
struct Engine {
    patterns: Arc<PatternTable>,
    header: HeaderExtractor,
    requirements: RequirementExtractor,
    recognizer: EntityRecognizer,
    cache: Option<AnalysisCache>,
}

/// Converts edital text into an [`AnalysisResult`]
///
/// Construct with [`EditalAnalyzer::new`], call [`EditalAnalyzer::initialize`]
/// once, then share the analyzer: `analyze` takes `&self` and may run
/// concurrently.
pub struct EditalAnalyzer {
    config: AnalyzerConfig,
    model_override: Option<Arc<dyn LanguageModel>>,
    backend_override: Option<Arc<dyn CacheBackend>>,
    engine: Option<Engine>,
}

impl EditalAnalyzer {
    /// Create an analyzer; nothing is loaded until `initialize`
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            model_override: None,
            backend_override: None,
            engine: None,
        }
    }

    /// Use this model instead of loading `model_name`
    pub fn with_model(mut self, model: Arc<dyn LanguageModel>) -> Self {
        self.model_override = Some(model);
        self
    }

    /// Use this cache backend instead of opening `cache_url`
    pub fn with_cache_backend(mut self, backend: Arc<dyn CacheBackend>) -> Self {
        self.backend_override = Some(backend);
        self
    }

    /// Active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// True once `initialize` succeeded
    pub fn is_initialized(&self) -> bool {
        self.engine.is_some()
    }

    /// Load the pattern table and the language model, and open the cache
    ///
    /// A cache that cannot be opened is logged and the analyzer runs
    /// uncached. Calling this twice is an error.
    pub async fn initialize(&mut self) -> Result<(), AnalyzerError> {
        if self.engine.is_some() {
            return Err(AnalyzerError::Initialization(
                "analyzer is already initialized".to_string(),
            ));
        }
        self.config.validate().map_err(AnalyzerError::Config)?;

        info!("Initializing edital analyzer");

        let patterns = Arc::new(PatternTable::load().map_err(|e| {
            error!("Failed to load pattern table: {}", e);
            AnalyzerError::from(e)
        })?);

        let model = match self.model_override.take() {
            Some(model) => model,
            None => self.load_configured_model().await?,
        };

        let recognizer = EntityRecognizer::new(
            model,
            EntityRuler::new(patterns.entity_phrases.clone()),
        )
        .with_max_text_length(self.config.max_text_length);

        let cache = if self.config.enable_cache {
            self.open_cache()
        } else {
            info!("Result caching disabled");
            None
        };

        info!(
            "Analyzer ready: model '{}', cache {}",
            recognizer.model_name(),
            cache
                .as_ref()
                .map(|c| c.backend_name().to_string())
                .unwrap_or_else(|| "off".to_string())
        );

        self.engine = Some(Engine {
            header: HeaderExtractor::new(Arc::clone(&patterns)),
            requirements: RequirementExtractor::new(Arc::clone(&patterns)),
            patterns,
            recognizer,
            cache,
        });
        Ok(())
    }

    async fn load_configured_model(&self) -> Result<Arc<dyn LanguageModel>, AnalyzerError> {
        let name = self.config.model_name.clone();
        let path = self.config.model_path.clone();

        let loaded = tokio::task::spawn_blocking(move || load_model(&name, &path))
            .await
            .map_err(|e| AnalyzerError::Initialization(format!("model loader failed: {e}")))?;

        loaded.map_err(|e| {
            error!("Failed to load language model '{}': {}", self.config.model_name, e);
            AnalyzerError::from(e)
        })
    }

    fn open_cache(&mut self) -> Option<AnalysisCache> {
        let backend = match self.backend_override.take() {
            Some(backend) => backend,
            None => match open_backend(&self.config.cache_url) {
                Ok(backend) => backend,
                Err(e) => {
                    warn!(
                        "Cache backend '{}' unavailable, running uncached: {}",
                        self.config.cache_url, e
                    );
                    return None;
                }
            },
        };

        Some(
            AnalysisCache::new(backend, self.config.cache_ttl())
                .with_timeout(self.config.cache_timeout()),
        )
    }

    /// Analyze one edital text
    ///
    /// Returns a cached result when one exists. Otherwise entity recognition
    /// runs on a blocking worker, bounded by the inference timeout, while
    /// header fields and requirements are extracted on the calling task.
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalyzerError> {
        let engine = self.engine.as_ref().ok_or(AnalyzerError::NotInitialized)?;

        if text.trim().is_empty() {
            return Err(AnalyzerError::EmptyInput);
        }

        if let Some(cache) = &engine.cache {
            if let Some(hit) = cache.get(text).await {
                debug!("Returning cached analysis");
                return Ok(hit);
            }
        }

        let recognizer = engine.recognizer.clone();
        let ner_text = text.to_string();
        let inference_timeout = self.config.inference_timeout();
        let entities = async move {
            let worker = tokio::task::spawn_blocking(move || recognizer.recognize(&ner_text));
            match timeout(inference_timeout, worker).await {
                Ok(Ok(recognized)) => recognized.map_err(AnalyzerError::from),
                Ok(Err(e)) => Err(AnalyzerError::ModelInference(format!(
                    "inference worker failed: {e}"
                ))),
                Err(_) => Err(AnalyzerError::InferenceTimeout(inference_timeout.as_secs())),
            }
        };
        let fields = async {
            let header = engine.header.extract(text);
            let requirements = engine.requirements.extract(text);
            (header, requirements)
        };

        let (entities, (header, requirements)) = tokio::join!(entities, fields);
        let entities = entities.map_err(|e| {
            warn!("Entity recognition failed: {}", e);
            e
        })?;

        let result = AnalysisResult {
            header,
            entities,
            requirements,
        };

        info!(
            "Analysis complete: {} header fields, {} entities, {} requirements",
            result.header.found_fields(),
            result.entities.len(),
            result.requirements.len()
        );

        if let Some(cache) = &engine.cache {
            cache.put(text, &result).await;
        }

        Ok(result)
    }

    /// Current readiness report
    pub async fn status(&self) -> AnalyzerStatus {
        let Some(engine) = &self.engine else {
            return AnalyzerStatus {
                model_loaded: false,
                model_name: self.config.model_name.clone(),
                cache_connected: false,
                cache_backend: None,
                patterns_loaded: false,
                document_types_loaded: 0,
                pattern_counts: None,
            };
        };

        let cache_connected = match &engine.cache {
            Some(cache) => cache.is_connected().await,
            None => false,
        };

        AnalyzerStatus {
            model_loaded: true,
            model_name: engine.recognizer.model_name().to_string(),
            cache_connected,
            cache_backend: engine.cache.as_ref().map(|c| c.backend_name().to_string()),
            patterns_loaded: true,
            document_types_loaded: engine.patterns.document_types.len(),
            pattern_counts: Some(engine.patterns.counts()),
        }
    }
}
