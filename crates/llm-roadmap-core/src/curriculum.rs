//! # Built-in Curriculum
//!
//! The 16-stage, 8-phase LLM lifecycle curriculum, from research to MLOps.
//!
//! | Phase | Name         | Stages |
//! |-------|--------------|--------|
//! | 1     | Foundation   | 1-2    |
//! | 2     | Data         | 3-5    |
//! | 3     | Architecture | 6-8    |
//! | 4     | Training     | 9-10   |
//! | 5     | Alignment    | 11-12  |
//! | 6     | Evaluation   | 13     |
//! | 7     | Production   | 14-15  |
//! | 8     | Operations   | 16     |

use crate::{Difficulty, Phase, PhaseNumber, Stage, StageId};

/// Overall time estimate of the built-in curriculum.
pub const TOTAL_DURATION: &str = "~2 hours";

/// The eight phases, in display order.
#[must_use]
pub fn builtin_phases() -> Vec<Phase> {
    vec![
        Phase::new(1, "Foundation", "🎯", "#6366f1"),
        Phase::new(2, "Data", "📊", "#10b981"),
        Phase::new(3, "Architecture", "🧠", "#8b5cf6"),
        Phase::new(4, "Training", "⚡", "#f59e0b"),
        Phase::new(5, "Alignment", "🎓", "#ec4899"),
        Phase::new(6, "Evaluation", "📋", "#06b6d4"),
        Phase::new(7, "Production", "🚀", "#ef4444"),
        Phase::new(8, "Operations", "🔄", "#84cc16"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn stage(
    id: u32,
    slug: &str,
    phase: u32,
    icon: &str,
    title: &str,
    subtitle: &str,
    description: &str,
    color: &str,
    duration: &str,
    difficulty: Difficulty,
    key_topics: &[&str],
) -> Stage {
    Stage {
        id: StageId(id),
        slug: slug.to_string(),
        phase_number: PhaseNumber(phase),
        icon: icon.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        description: description.to_string(),
        color: color.to_string(),
        duration: duration.to_string(),
        difficulty,
        key_topics: key_topics.iter().map(|t| (*t).to_string()).collect(),
    }
}

/// The sixteen stages, in canonical (ascending id) order.
#[must_use]
pub fn builtin_stages() -> Vec<Stage> {
    use Difficulty::{Advanced, Beginner, Intermediate};

    vec![
        // Phase 1: Foundation
        stage(
            1,
            "research-vision",
            1,
            "🔬",
            "Research & Vision",
            "Day 0: Where It All Begins",
            "Understanding the problem space, defining objectives, and surveying the landscape of language AI research.",
            "#6366f1",
            "~5 min",
            Beginner,
            &["Why LLMs?", "History of NLP", "Key Research Papers", "Problem Definition"],
        ),
        stage(
            2,
            "architecture-planning",
            1,
            "📐",
            "Architecture Planning",
            "Blueprint for Intelligence",
            "Planning compute requirements, team structure, infrastructure, and making critical architectural decisions.",
            "#818cf8",
            "~6 min",
            Intermediate,
            &["Compute Planning", "Team Structure", "Infrastructure", "Cost Estimation"],
        ),
        // Phase 2: Data
        stage(
            3,
            "data-collection",
            2,
            "🌍",
            "Data Collection",
            "Gathering the World's Knowledge",
            "Crawling the web, licensing books, collecting code repositories, and assembling the training corpus.",
            "#10b981",
            "~7 min",
            Beginner,
            &["Web Crawling", "Common Crawl", "Data Sources", "Licensing"],
        ),
        stage(
            4,
            "data-processing",
            2,
            "🧹",
            "Data Processing & Quality",
            "Cleaning the Chaos",
            "Deduplication, filtering toxic content, removing PII, and ensuring data quality at scale.",
            "#34d399",
            "~6 min",
            Intermediate,
            &["Deduplication", "Quality Filtering", "PII Removal", "Data Versioning"],
        ),
        stage(
            5,
            "tokenization",
            2,
            "✂️",
            "Tokenization",
            "Breaking Language into Pieces",
            "Converting text into tokens using BPE, WordPiece, or SentencePiece algorithms.",
            "#059669",
            "~8 min",
            Intermediate,
            &["BPE Algorithm", "Vocabulary Size", "Subword Tokenization", "Special Tokens"],
        ),
        // Phase 3: Architecture
        stage(
            6,
            "transformer-architecture",
            3,
            "🏗️",
            "Transformer Deep Dive",
            "The Architecture That Changed Everything",
            "Understanding self-attention, feed-forward networks, embeddings, and the full transformer architecture.",
            "#8b5cf6",
            "~10 min",
            Intermediate,
            &["Self-Attention", "Multi-Head Attention", "Feed-Forward", "Layer Normalization"],
        ),
        stage(
            7,
            "modern-innovations",
            3,
            "💡",
            "Modern Innovations",
            "State-of-the-Art Techniques",
            "Flash Attention, RoPE, GQA, Mixture of Experts, and other cutting-edge improvements.",
            "#a78bfa",
            "~8 min",
            Advanced,
            &["Flash Attention", "RoPE", "GQA", "Mixture of Experts"],
        ),
        stage(
            8,
            "scaling-laws",
            3,
            "📈",
            "Scaling Laws",
            "The Science of Getting Bigger",
            "Chinchilla scaling laws, compute-optimal training, and understanding the power of scale.",
            "#c084fc",
            "~6 min",
            Advanced,
            &["Chinchilla Laws", "Compute Optimal", "Emergent Abilities", "Model Sizing"],
        ),
        // Phase 4: Training
        stage(
            9,
            "training-infrastructure",
            4,
            "🖥️",
            "Training Infrastructure",
            "Building the Compute Cluster",
            "GPU clusters, distributed training, data parallelism, model parallelism, and pipeline parallelism.",
            "#f59e0b",
            "~7 min",
            Advanced,
            &["GPU Clusters", "Data Parallelism", "Model Parallelism", "DeepSpeed/FSDP"],
        ),
        stage(
            10,
            "pretraining-process",
            4,
            "📖",
            "Pre-training Process",
            "Learning to Predict",
            "Next-token prediction, loss functions, optimizers, learning rate schedules, and checkpointing.",
            "#fbbf24",
            "~9 min",
            Intermediate,
            &["Causal LM", "AdamW Optimizer", "Cosine Schedule", "Gradient Checkpointing"],
        ),
        // Phase 5: Alignment
        stage(
            11,
            "supervised-finetuning",
            5,
            "👩‍🏫",
            "Supervised Fine-tuning",
            "Teaching the Model to Follow Instructions",
            "Instruction tuning, chat formatting, and creating the foundation for helpful AI assistants.",
            "#ec4899",
            "~7 min",
            Intermediate,
            &["Instruction Tuning", "Chat Templates", "LoRA/QLoRA", "Data Quality"],
        ),
        stage(
            12,
            "rlhf-dpo",
            5,
            "🏆",
            "RLHF & DPO",
            "Learning from Human Preferences",
            "Reward modeling, PPO, DPO, Constitutional AI, and aligning models with human values.",
            "#f472b6",
            "~10 min",
            Advanced,
            &["Reward Models", "PPO", "DPO", "Constitutional AI"],
        ),
        // Phase 6: Evaluation
        stage(
            13,
            "benchmarking",
            6,
            "📊",
            "Benchmarking & Evals",
            "Measuring Intelligence",
            "MMLU, HumanEval, MT-Bench, safety evaluations, and comprehensive model assessment.",
            "#06b6d4",
            "~8 min",
            Intermediate,
            &["MMLU", "HumanEval", "MT-Bench", "Red Teaming"],
        ),
        // Phase 7: Production
        stage(
            14,
            "model-optimization",
            7,
            "⚙️",
            "Model Optimization",
            "Making It Fast and Small",
            "Quantization, pruning, distillation, and techniques to make models production-ready.",
            "#ef4444",
            "~7 min",
            Advanced,
            &["Quantization (INT4/INT8)", "Pruning", "Distillation", "GGUF/GGML"],
        ),
        stage(
            15,
            "deployment-serving",
            7,
            "🚀",
            "Deployment & Serving",
            "Launching to the World",
            "vLLM, TensorRT-LLM, API design, load balancing, and production infrastructure.",
            "#f87171",
            "~8 min",
            Advanced,
            &["vLLM", "TensorRT-LLM", "KV Caching", "Speculative Decoding"],
        ),
        // Phase 8: Operations
        stage(
            16,
            "continuous-learning",
            8,
            "🔄",
            "Continuous Learning & MLOps",
            "The Never-Ending Journey",
            "Monitoring, feedback loops, model updates, A/B testing, and maintaining AI systems in production.",
            "#84cc16",
            "~6 min",
            Intermediate,
            &["Monitoring", "Drift Detection", "A/B Testing", "Model Versioning"],
        ),
    ]
}
