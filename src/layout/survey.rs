// src/layout/survey.rs

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::layout::generate_layout_seeded;
use log::info;
use rayon::prelude::*;
use serde::Serialize;

/// Aggregate shape of many generated plans.
#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct SurveyStats {
    pub plans: usize,
    pub total_rooms: usize,
    pub dead_ends: usize,
    pub truncated_plans: usize,
    pub overlaps: usize,
    pub shortest: usize,
    pub longest: usize,
}

impl SurveyStats {
    pub fn mean_length(&self) -> f64 {
        if self.plans == 0 {
            0.0
        } else {
            self.total_rooms as f64 / self.plans as f64
        }
    }

    fn merge(mut self, other: SurveyStats) -> SurveyStats {
        if other.plans == 0 {
            return self;
        }
        if self.plans == 0 {
            return other;
        }
        self.plans += other.plans;
        self.total_rooms += other.total_rooms;
        self.dead_ends += other.dead_ends;
        self.truncated_plans += other.truncated_plans;
        self.overlaps += other.overlaps;
        self.shortest = self.shortest.min(other.shortest);
        self.longest = self.longest.max(other.longest);
        self
    }
}

/// Generates one plan per seed in parallel and folds their statistics.
pub fn survey(config: &LayoutConfig, room_count: usize, seeds: &[u64]) -> Result<SurveyStats> {
    let per_plan = seeds
        .par_iter()
        .map(|&seed| -> Result<SurveyStats> {
            let plan = generate_layout_seeded(room_count, config, seed)?;
            Ok(SurveyStats {
                plans: 1,
                total_rooms: plan.len(),
                dead_ends: plan.dead_ends().count(),
                truncated_plans: usize::from(plan.is_truncated()),
                overlaps: plan.overlaps.len(),
                shortest: plan.len(),
                longest: plan.len(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let stats = per_plan
        .into_iter()
        .fold(SurveyStats::default(), SurveyStats::merge);
    info!(
        "surveyed {} plans of {} rooms: mean length {:.1}, {} truncated",
        stats.plans,
        room_count,
        stats.mean_length(),
        stats.truncated_plans
    );
    Ok(stats)
}
